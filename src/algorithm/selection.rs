//! Stack of chosen rows shared by manual selection, search and sampling
//!
//! Each entry remembers the cover tokens its selection produced, so popping
//! undoes exactly what pushing did, newest cover first.

use crate::algorithm::fabric::NodeId;
use crate::algorithm::matrix::{CoverToken, Matrix};
use std::hash::Hash;

/// Chosen rows in selection order, with the covers each one holds
#[derive(Debug)]
pub struct SelectionStack<R> {
    rows: Vec<R>,
    journal: Vec<Vec<CoverToken>>,
}

impl<R> Default for SelectionStack<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            journal: Vec::new(),
        }
    }
}

impl<R> SelectionStack<R> {
    /// Row identities, oldest first
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of chosen rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn push(&mut self, row: R, tokens: Vec<CoverToken>) {
        self.rows.push(row);
        self.journal.push(tokens);
    }

    fn pop(&mut self) -> Option<(R, Vec<CoverToken>)> {
        let row = self.rows.pop()?;
        let tokens = self.journal.pop().unwrap_or_default();
        Some((row, tokens))
    }
}

impl<R, C> Matrix<R, C>
where
    R: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
{
    /// Select `row` as part of the partial solution
    ///
    /// A registered row covers the column of its first cell and then every
    /// other column it touches, exactly as if search had chosen it. Rows
    /// never added are still recorded but change nothing in the matrix.
    pub fn push(&mut self, row: R) {
        let tokens = match self.row_cell(&row) {
            Some(cell) => self.cover_row(cell, true),
            None => Vec::new(),
        };
        self.selection.push(row, tokens);
    }

    /// Remove the most recently selected row and undo its covers
    ///
    /// Returns the removed identity, or `None` when nothing was selected.
    pub fn pop(&mut self) -> Option<R> {
        let (row, tokens) = self.selection.pop()?;
        self.uncover_row(tokens);
        Some(row)
    }

    /// Currently selected rows, oldest first
    pub fn selection(&self) -> &[R] {
        self.selection.rows()
    }

    /// Pop every selected row
    pub fn reset(&mut self) {
        while self.pop().is_some() {}
    }

    /// Select the row of `cell` while its own column is already covered
    pub(crate) fn choose(&mut self, cell: NodeId) {
        let Some(row) = self.fabric.row(cell).cloned() else {
            return;
        };
        let tokens = self.cover_row(cell, false);
        self.selection.push(row, tokens);
    }
}
