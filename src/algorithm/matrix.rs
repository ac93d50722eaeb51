//! Sparse exact cover matrix with reversible column covering
//!
//! Columns are registered the first time a caller identity is seen, and their
//! headers join the header ring in that order. The ring order is the tie-break
//! order of the column heuristic, so enumeration order depends only on the
//! insertion history.

use crate::algorithm::fabric::{Fabric, Label, NodeId, ROOT};
use crate::algorithm::selection::SelectionStack;
use bitvec::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MATRIX_ID: AtomicU64 = AtomicU64::new(0);

/// Proof that a column is currently covered
///
/// Handed out by [`Matrix::cover`] and consumed by [`Matrix::uncover`]. Tokens
/// cannot be copied, so every cover is undone at most once, and they carry
/// the identity of the issuing matrix.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a covered column stays covered until its token is passed to `uncover`"]
pub struct CoverToken {
    matrix: u64,
    header: NodeId,
}

impl CoverToken {
    /// Header of the covered column
    pub const fn header(&self) -> NodeId {
        self.header
    }
}

/// Exact cover instance built from `(row, column)` pairs
///
/// `R` identifies rows and `C` identifies columns. Both are arbitrary
/// caller values; the same row identity added for several columns forms one
/// row of the matrix.
#[derive(Debug)]
pub struct Matrix<R, C> {
    id: u64,
    pub(crate) fabric: Fabric<R, C>,
    rows: HashMap<R, NodeId>,
    columns: HashMap<C, NodeId>,
    headers: Vec<NodeId>,
    optional: BitVec,
    covered: BitVec,
    /// Headers covered and not yet uncovered, most recent last
    outstanding: Vec<NodeId>,
    /// Headers marked optional while covers were outstanding
    deferred_optional: Vec<NodeId>,
    pub(crate) selection: SelectionStack<R>,
}

impl<R, C> Default for Matrix<R, C>
where
    R: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C> Matrix<R, C>
where
    R: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
{
    /// Create a matrix with no rows or columns
    pub fn new() -> Self {
        Self {
            id: NEXT_MATRIX_ID.fetch_add(1, Ordering::Relaxed),
            fabric: Fabric::new(),
            rows: HashMap::new(),
            columns: HashMap::new(),
            headers: Vec::new(),
            optional: BitVec::new(),
            covered: BitVec::new(),
            outstanding: Vec::new(),
            deferred_optional: Vec::new(),
            selection: SelectionStack::default(),
        }
    }

    /// Add the entry `(row, column)`
    ///
    /// Repeated pairs are not merged: each call adds another cell, which
    /// raises the apparent branching degree of that column.
    pub fn add(&mut self, row: R, column: C) {
        let header = self.header_or_insert(column, true);

        let x = self.fabric.alloc(Label::Cell(row.clone()));
        let first = *self.rows.entry(row).or_insert(x);
        if first != x {
            self.fabric.insert_lr(x, first);
        }

        self.fabric.insert_ud(x, header);
        self.fabric.set_column(x, header);
        self.fabric.grow(header);
    }

    /// Mark `column` as covered at most once instead of exactly once
    ///
    /// Detaches the header from the header ring and leaves its rows alone.
    /// May be called before or after rows reference the column; calling it
    /// again has no further effect. While any cover is outstanding (rows are
    /// selected) the change is deferred until the last cover is undone, since
    /// covered neighbours still hold links to the header.
    pub fn optional(&mut self, column: C) {
        let header = self.header_or_insert(column, false);
        let fresh = self.fabric.left(header) == header;
        if fresh || self.outstanding.is_empty() {
            self.detach_optional(header);
        } else if !self.deferred_optional.contains(&header) {
            self.deferred_optional.push(header);
        }
    }

    fn detach_optional(&mut self, header: NodeId) {
        let ordinal = self.ordinal(header);
        if self.optional.get(ordinal).as_deref() == Some(&true) {
            return;
        }
        self.fabric.remove_lr(header);
        self.fabric.isolate_lr(header);
        self.optional.set(ordinal, true);
    }

    fn header_or_insert(&mut self, column: C, link: bool) -> NodeId {
        if let Some(&header) = self.columns.get(&column) {
            return header;
        }

        let ordinal = self.headers.len();
        let header = self.fabric.alloc(Label::Header {
            name: column.clone(),
            ordinal,
        });
        if link {
            self.fabric.insert_lr(header, ROOT);
        }
        self.columns.insert(column, header);
        self.headers.push(header);
        self.optional.push(false);
        self.covered.push(false);
        header
    }

    fn ordinal(&self, header: NodeId) -> usize {
        match self.fabric.label(header) {
            Label::Header { ordinal, .. } => *ordinal,
            _ => 0,
        }
    }

    fn is_covered(&self, header: NodeId) -> bool {
        self.covered
            .get(self.ordinal(header))
            .as_deref()
            .copied()
            .unwrap_or(false)
    }

    /// Cover the column headed by `header`
    ///
    /// Removes the header from the header ring and every row intersecting
    /// the column from all other columns. Returns `None`, leaving the matrix
    /// untouched, when `header` is not a column header or is already covered.
    pub fn cover(&mut self, header: NodeId) -> Option<CoverToken> {
        if header >= self.fabric.len() || !matches!(self.fabric.label(header), Label::Header { .. })
        {
            return None;
        }
        if self.is_covered(header) {
            return None;
        }
        Some(self.cover_header(header))
    }

    pub(crate) fn cover_header(&mut self, c: NodeId) -> CoverToken {
        self.fabric.remove_lr(c);

        let mut i = self.fabric.down(c);
        while i != c {
            let mut j = self.fabric.right(i);
            while j != i {
                self.fabric.remove_ud(j);
                let column = self.fabric.column(j);
                self.fabric.shrink(column);
                j = self.fabric.right(j);
            }
            i = self.fabric.down(i);
        }

        let ordinal = self.ordinal(c);
        self.covered.set(ordinal, true);
        self.outstanding.push(c);
        CoverToken {
            matrix: self.id,
            header: c,
        }
    }

    /// Undo the cover that issued `token`
    ///
    /// # Panics
    ///
    /// Panics if `token` was issued by a different matrix, or is not the
    /// most recently issued token still outstanding. Covers must be undone in
    /// reverse order.
    pub fn uncover(&mut self, token: CoverToken) {
        assert_eq!(
            token.matrix, self.id,
            "cover token belongs to a different matrix"
        );
        let c = token.header;
        assert_eq!(
            self.outstanding.last(),
            Some(&c),
            "cover tokens must be returned in reverse order of issue"
        );
        self.outstanding.pop();

        let mut i = self.fabric.up(c);
        while i != c {
            let mut j = self.fabric.left(i);
            while j != i {
                let column = self.fabric.column(j);
                self.fabric.grow(column);
                self.fabric.restore_ud(j);
                j = self.fabric.left(j);
            }
            i = self.fabric.up(i);
        }
        self.fabric.restore_lr(c);

        let ordinal = self.ordinal(c);
        self.covered.set(ordinal, false);

        if self.outstanding.is_empty() {
            for header in std::mem::take(&mut self.deferred_optional) {
                self.detach_optional(header);
            }
        }
    }

    /// Cover the columns of the row containing `cell`, walking right
    ///
    /// The column of `cell` itself is covered first when `include_start` is
    /// set. Columns already covered are skipped, so a row that repeats a
    /// column or conflicts with the current selection never covers a column
    /// twice.
    pub(crate) fn cover_row(&mut self, cell: NodeId, include_start: bool) -> Vec<CoverToken> {
        let mut tokens = Vec::new();
        if include_start {
            let column = self.fabric.column(cell);
            tokens.extend(self.cover(column));
        }
        let mut j = self.fabric.right(cell);
        while j != cell {
            let column = self.fabric.column(j);
            tokens.extend(self.cover(column));
            j = self.fabric.right(j);
        }
        tokens
    }

    /// Uncover columns covered by [`cover_row`](Self::cover_row), newest first
    pub(crate) fn uncover_row(&mut self, mut tokens: Vec<CoverToken>) {
        while let Some(token) = tokens.pop() {
            self.uncover(token);
        }
    }

    /// Live header with the fewest candidates
    ///
    /// Ties go to the header met first in ring order. `None` means every
    /// mandatory column is satisfied.
    pub fn choose_column(&self) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        for header in self.fabric.row_ring(ROOT) {
            match best {
                Some(current) if self.fabric.size(header) >= self.fabric.size(current) => {}
                _ => best = Some(header),
            }
        }
        best
    }

    /// Header of `column`, if the column has been seen
    pub fn header(&self, column: &C) -> Option<NodeId> {
        self.columns.get(column).copied()
    }

    /// Identity of the column headed by `header`
    pub fn column_name(&self, header: NodeId) -> Option<&C> {
        if header >= self.fabric.len() {
            return None;
        }
        match self.fabric.label(header) {
            Label::Header { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Live candidate count of the column headed by `header`
    pub fn size(&self, header: NodeId) -> usize {
        if header >= self.fabric.len() {
            return 0;
        }
        self.fabric.size(header)
    }

    /// Columns still in the header ring, in ring order, with their sizes
    pub fn live_columns(&self) -> Vec<(&C, usize)> {
        self.fabric
            .row_ring(ROOT)
            .filter_map(|header| {
                self.column_name(header)
                    .map(|name| (name, self.fabric.size(header)))
            })
            .collect()
    }

    /// All columns in creation order, each with its optional flag
    pub fn columns(&self) -> Vec<(&C, bool)> {
        self.headers
            .iter()
            .zip(self.optional.iter().by_vals())
            .filter_map(|(&header, optional)| self.column_name(header).map(|name| (name, optional)))
            .collect()
    }

    /// Number of distinct columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Optional flags indexed by column creation ordinal
    pub fn optional_columns(&self) -> &BitSlice {
        &self.optional
    }

    /// Registered row identities, in no particular order
    pub fn rows(&self) -> impl Iterator<Item = &R> {
        self.rows.keys()
    }

    /// Number of distinct rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// First inserted cell of `row`
    pub fn row_cell(&self, row: &R) -> Option<NodeId> {
        self.rows.get(row).copied()
    }

    /// Columns touched by `row`, in insertion order, repeats included
    pub fn row_columns(&self, row: &R) -> Vec<&C> {
        self.row_headers(row)
            .into_iter()
            .filter_map(|header| self.column_name(header))
            .collect()
    }

    /// Creation ordinals of the columns touched by `row`, in insertion order
    pub fn row_ordinals(&self, row: &R) -> Vec<usize> {
        self.row_headers(row)
            .into_iter()
            .map(|header| self.ordinal(header))
            .collect()
    }

    fn row_headers(&self, row: &R) -> Vec<NodeId> {
        let Some(first) = self.row_cell(row) else {
            return Vec::new();
        };
        std::iter::once(first)
            .chain(self.fabric.row_ring(first))
            .map(|cell| self.fabric.column(cell))
            .collect()
    }

    /// Number of covers not yet undone
    pub fn cover_depth(&self) -> usize {
        self.outstanding.len()
    }

    /// Read access to the underlying cells
    pub const fn fabric(&self) -> &Fabric<R, C> {
        &self.fabric
    }

    /// Check ring links and column sizes against a full recount
    ///
    /// Every header's size must match the cells linked into its column
    /// ring, every linked cell must be reachable from both neighbours, and
    /// the header ring must hold exactly the mandatory columns not covered.
    pub fn is_consistent(&self) -> bool {
        let mut live = 0;
        for header in self.fabric.row_ring(ROOT) {
            if !self.fabric.is_linked_lr(header)
                || self.is_covered(header)
                || self.optional.get(self.ordinal(header)).as_deref() != Some(&false)
            {
                return false;
            }
            live += 1;
        }
        if !self.fabric.is_linked_lr(ROOT) {
            return false;
        }

        let expected_live = self
            .covered
            .iter()
            .by_vals()
            .zip(self.optional.iter().by_vals())
            .filter(|&(covered, optional)| !covered && !optional)
            .count();
        if live != expected_live {
            return false;
        }

        self.headers.iter().all(|&header| {
            let mut count = 0;
            for cell in self.fabric.column_ring(header) {
                if !self.fabric.is_linked_ud(cell) || self.fabric.column(cell) != header {
                    return false;
                }
                count += 1;
            }
            count == self.fabric.size(header)
        })
    }
}
