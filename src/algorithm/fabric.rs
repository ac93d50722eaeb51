//! Arena of doubly linked cells threaded into horizontal and vertical rings
//!
//! Every link is an index into the arena, so cells can be unlinked and
//! relinked from any direction without shared mutable references. A cell that
//! has been removed from a ring keeps its own stale links, which is what lets
//! `restore_*` put it back in O(1).

// Arena indices are only ever produced by `alloc`, so they never dangle
#![allow(clippy::indexing_slicing)]

/// Index of a cell inside a [`Fabric`]
pub type NodeId = usize;

/// Index of the root sentinel anchoring the header ring
pub const ROOT: NodeId = 0;

/// What a cell stands for in the sparse matrix
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label<R, C> {
    /// Sentinel anchoring the header ring
    Root,
    /// Column header
    Header {
        /// Caller-supplied column identity
        name: C,
        /// Position of the column in creation order
        ordinal: usize,
    },
    /// Matrix entry belonging to the given row
    Cell(R),
}

/// Single cell with its four neighbours
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<R, C> {
    left: NodeId,
    right: NodeId,
    up: NodeId,
    down: NodeId,
    column: NodeId,
    size: usize,
    label: Label<R, C>,
}

/// Owner of all cells of one matrix
///
/// Equality compares every link, size and label, which makes a cloned
/// fabric a complete snapshot of the matrix state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fabric<R, C> {
    nodes: Vec<Node<R, C>>,
}

impl<R, C> Default for Fabric<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C> Fabric<R, C> {
    /// Create a fabric holding only the root sentinel
    pub fn new() -> Self {
        let mut fabric = Self { nodes: Vec::new() };
        fabric.alloc(Label::Root);
        fabric
    }

    /// Allocate a self-looped cell that is its own column
    pub fn alloc(&mut self, label: Label<R, C>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            left: id,
            right: id,
            up: id,
            down: id,
            column: id,
            size: 0,
            label,
        });
        id
    }

    /// Number of cells including the root and all headers
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root sentinel exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Left neighbour
    pub fn left(&self, x: NodeId) -> NodeId {
        self.nodes[x].left
    }

    /// Right neighbour
    pub fn right(&self, x: NodeId) -> NodeId {
        self.nodes[x].right
    }

    /// Upper neighbour
    pub fn up(&self, x: NodeId) -> NodeId {
        self.nodes[x].up
    }

    /// Lower neighbour
    pub fn down(&self, x: NodeId) -> NodeId {
        self.nodes[x].down
    }

    /// Header of the column owning `x`
    pub fn column(&self, x: NodeId) -> NodeId {
        self.nodes[x].column
    }

    /// Live candidate count of a header (zero for other cells)
    pub fn size(&self, x: NodeId) -> usize {
        self.nodes[x].size
    }

    /// Label of `x`
    pub fn label(&self, x: NodeId) -> &Label<R, C> {
        &self.nodes[x].label
    }

    /// Row identity of a matrix entry, `None` for headers and the root
    pub fn row(&self, x: NodeId) -> Option<&R> {
        match &self.nodes[x].label {
            Label::Cell(row) => Some(row),
            _ => None,
        }
    }

    pub(crate) fn set_column(&mut self, x: NodeId, column: NodeId) {
        self.nodes[x].column = column;
    }

    pub(crate) fn grow(&mut self, header: NodeId) {
        self.nodes[header].size += 1;
    }

    pub(crate) fn shrink(&mut self, header: NodeId) {
        self.nodes[header].size -= 1;
    }

    /// Splice `x` into the horizontal ring of `at`, just left of `at`
    pub fn insert_lr(&mut self, x: NodeId, at: NodeId) {
        let left = self.nodes[at].left;
        self.nodes[x].left = left;
        self.nodes[x].right = at;
        self.nodes[left].right = x;
        self.nodes[at].left = x;
    }

    /// Splice `x` into the vertical ring of `at`, just above `at`
    pub fn insert_ud(&mut self, x: NodeId, at: NodeId) {
        let up = self.nodes[at].up;
        self.nodes[x].up = up;
        self.nodes[x].down = at;
        self.nodes[up].down = x;
        self.nodes[at].up = x;
    }

    /// Unlink `x` from its horizontal ring, keeping its own links
    pub fn remove_lr(&mut self, x: NodeId) {
        let Node { left, right, .. } = self.nodes[x];
        self.nodes[right].left = left;
        self.nodes[left].right = right;
    }

    /// Unlink `x` from its vertical ring, keeping its own links
    pub fn remove_ud(&mut self, x: NodeId) {
        let Node { up, down, .. } = self.nodes[x];
        self.nodes[down].up = up;
        self.nodes[up].down = down;
    }

    /// Relink `x` into its horizontal ring from its stale links
    pub fn restore_lr(&mut self, x: NodeId) {
        let Node { left, right, .. } = self.nodes[x];
        self.nodes[right].left = x;
        self.nodes[left].right = x;
    }

    /// Relink `x` into its vertical ring from its stale links
    pub fn restore_ud(&mut self, x: NodeId) {
        let Node { up, down, .. } = self.nodes[x];
        self.nodes[down].up = x;
        self.nodes[up].down = x;
    }

    /// Turn `x` into a horizontal singleton after it has been removed
    pub(crate) fn isolate_lr(&mut self, x: NodeId) {
        self.nodes[x].left = x;
        self.nodes[x].right = x;
    }

    /// True when `x` is currently linked into its horizontal ring
    pub fn is_linked_lr(&self, x: NodeId) -> bool {
        let Node { left, right, .. } = self.nodes[x];
        self.nodes[left].right == x && self.nodes[right].left == x
    }

    /// True when `x` is currently linked into its vertical ring
    pub fn is_linked_ud(&self, x: NodeId) -> bool {
        let Node { up, down, .. } = self.nodes[x];
        self.nodes[up].down == x && self.nodes[down].up == x
    }

    /// Cells of the vertical ring of `start`, going down, excluding `start`
    pub fn column_ring(&self, start: NodeId) -> Ring<'_, R, C> {
        Ring::new(self, start, Self::down)
    }

    /// Cells of the horizontal ring of `start`, going right, excluding `start`
    pub fn row_ring(&self, start: NodeId) -> Ring<'_, R, C> {
        Ring::new(self, start, Self::right)
    }
}

/// Read-only walk around one ring
pub struct Ring<'a, R, C> {
    fabric: &'a Fabric<R, C>,
    start: NodeId,
    cursor: NodeId,
    step: fn(&Fabric<R, C>, NodeId) -> NodeId,
}

impl<'a, R, C> Ring<'a, R, C> {
    fn new(
        fabric: &'a Fabric<R, C>,
        start: NodeId,
        step: fn(&Fabric<R, C>, NodeId) -> NodeId,
    ) -> Self {
        Self {
            fabric,
            start,
            cursor: step(fabric, start),
            step,
        }
    }
}

impl<R, C> Iterator for Ring<'_, R, C> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.start {
            return None;
        }
        let current = self.cursor;
        self.cursor = (self.step)(self.fabric, current);
        Some(current)
    }
}
