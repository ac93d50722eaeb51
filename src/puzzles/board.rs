//! Polyomino tilings of a board as exact cover instances
//!
//! Each piece must be placed exactly once, so every piece gets a mandatory
//! column. Every board cell gets a column too, mandatory for a full tiling or
//! optional when the pieces only need to fit without overlapping. Rows are
//! the distinct placements of a piece orientation on the board.
//!
//! Boards are square grids in the plane. Turning a flat piece over in space
//! lands on one of its plane rotations or reflections, so enabling both
//! covers spatial rotation groups such as Kanoodle's. Hexagonal grids and
//! solid boards are not modelled; build those instances as a [`CoverFile`]
//! directly.

use crate::io::cover_file::CoverFile;
use ndarray::Array2;
use std::collections::BTreeSet;

/// Cell offsets `(row, col)` making up a piece
pub type Shape = Vec<(i32, i32)>;

/// Named piece with its cells in any coordinates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    /// Display name of the piece
    pub name: String,
    /// Cells of the piece in its base orientation
    pub cells: Shape,
}

/// One way to put a piece on the board
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Placement {
    /// Index of the piece in insertion order
    pub piece: usize,
    /// Board cells covered, sorted row-major
    pub cells: Vec<(usize, usize)>,
}

/// Builder for a board tiling instance
#[derive(Clone, Debug)]
pub struct BoardCover {
    board: Array2<bool>,
    pieces: Vec<Piece>,
    rotations: bool,
    reflections: bool,
    optional_cells: bool,
}

impl BoardCover {
    /// Start from a board mask where `true` marks a usable cell
    pub const fn new(board: Array2<bool>) -> Self {
        Self {
            board,
            pieces: Vec::new(),
            rotations: false,
            reflections: false,
            optional_cells: false,
        }
    }

    /// Rectangular board with every cell usable
    pub fn rectangle(rows: usize, cols: usize) -> Self {
        Self::new(Array2::from_elem((rows, cols), true))
    }

    /// Add a piece that must be placed exactly once
    #[must_use]
    pub fn piece(mut self, name: &str, cells: &[(i32, i32)]) -> Self {
        self.pieces.push(Piece {
            name: name.to_string(),
            cells: cells.to_vec(),
        });
        self
    }

    /// Allow quarter-turn rotations of every piece
    #[must_use]
    pub fn with_rotations(mut self, enabled: bool) -> Self {
        self.rotations = enabled;
        self
    }

    /// Allow mirror images of every piece
    #[must_use]
    pub fn with_reflections(mut self, enabled: bool) -> Self {
        self.reflections = enabled;
        self
    }

    /// Let board cells stay empty instead of requiring a full tiling
    #[must_use]
    pub fn with_optional_cells(mut self, enabled: bool) -> Self {
        self.optional_cells = enabled;
        self
    }

    /// Pieces in insertion order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Usable board cells in row-major order
    pub fn board_cells(&self) -> Vec<(usize, usize)> {
        self.board
            .indexed_iter()
            .filter(|&(_, &usable)| usable)
            .map(|(position, _)| position)
            .collect()
    }

    /// Distinct orientations of `shape`, each normalised to start at (0, 0)
    pub fn orientations(&self, shape: &[(i32, i32)]) -> BTreeSet<Shape> {
        let mut transforms = vec![shape.to_vec()];

        if self.rotations {
            let rot90 = rotate_90(shape);
            let rot180 = rotate_90(&rot90);
            let rot270 = rotate_90(&rot180);
            transforms.push(rot90);
            transforms.push(rot180);
            transforms.push(rot270);
        }

        if self.reflections {
            let current_len = transforms.len();
            for i in 0..current_len {
                if let Some(transform) = transforms.get(i) {
                    transforms.push(reflect(transform));
                }
            }
        }

        transforms.iter().map(|shape| normalize(shape)).collect()
    }

    /// Every placement of every piece orientation fully on usable cells
    ///
    /// Ordered by piece, then orientation, then top-left anchor row-major.
    pub fn placements(&self) -> Vec<Placement> {
        let (rows, cols) = self.board.dim();
        let mut placements = Vec::new();

        for (piece_index, piece) in self.pieces.iter().enumerate() {
            for shape in self.orientations(&piece.cells) {
                for anchor_row in 0..rows {
                    for anchor_col in 0..cols {
                        if let Some(cells) = self.place(&shape, anchor_row, anchor_col) {
                            placements.push(Placement {
                                piece: piece_index,
                                cells,
                            });
                        }
                    }
                }
            }
        }

        placements
    }

    fn place(
        &self,
        shape: &[(i32, i32)],
        anchor_row: usize,
        anchor_col: usize,
    ) -> Option<Vec<(usize, usize)>> {
        let mut cells = shape
            .iter()
            .map(|&(dr, dc)| {
                let row = usize::try_from(dr).ok()? + anchor_row;
                let col = usize::try_from(dc).ok()? + anchor_col;
                self.board
                    .get((row, col))
                    .copied()
                    .filter(|&usable| usable)
                    .map(|_| (row, col))
            })
            .collect::<Option<Vec<_>>>()?;
        cells.sort_unstable();
        Some(cells)
    }

    /// Build the exact cover instance
    ///
    /// Column `p` is piece `p`; board cells follow as columns
    /// `pieces.len() + k` for the `k`-th usable cell in row-major order. Row
    /// `i` is the `i`-th entry of [`placements`](Self::placements).
    pub fn cover_file(&self) -> CoverFile {
        let cells = self.board_cells();
        let offset = self.pieces.len();
        let column_of = |cell: &(usize, usize)| {
            cells
                .binary_search(cell)
                .ok()
                .and_then(|k| i32::try_from(offset + k).ok())
        };

        let mut pairs = Vec::new();
        for (index, placement) in self.placements().iter().enumerate() {
            let (Ok(row), Ok(piece)) = (i32::try_from(index), i32::try_from(placement.piece))
            else {
                continue;
            };
            pairs.push((row, piece));
            pairs.extend(
                placement
                    .cells
                    .iter()
                    .filter_map(|cell| column_of(cell))
                    .map(|column| (row, column)),
            );
        }

        let optional = if self.optional_cells {
            (0..cells.len())
                .filter_map(|k| i32::try_from(offset + k).ok())
                .collect()
        } else {
            Vec::new()
        };

        CoverFile { pairs, optional }
    }
}

fn rotate_90(shape: &[(i32, i32)]) -> Shape {
    shape.iter().map(|&(row, col)| (col, -row)).collect()
}

fn reflect(shape: &[(i32, i32)]) -> Shape {
    shape.iter().map(|&(row, col)| (row, -col)).collect()
}

fn normalize(shape: &[(i32, i32)]) -> Shape {
    let min_row = shape.iter().map(|&(row, _)| row).min().unwrap_or(0);
    let min_col = shape.iter().map(|&(_, col)| col).min().unwrap_or(0);
    let mut cells: Shape = shape
        .iter()
        .map(|&(row, col)| (row - min_row, col - min_col))
        .collect();
    cells.sort_unstable();
    cells.dedup();
    cells
}
