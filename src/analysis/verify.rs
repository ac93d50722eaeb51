//! Independent check that a list of rows forms an exact cover

use crate::algorithm::matrix::Matrix;
use crate::io::error::{Result, invalid_cover};
use bitvec::prelude::*;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Snapshot of row membership used to validate reported solutions
///
/// Built from a matrix before searching so it can check solutions while the
/// matrix itself is borrowed by the search.
#[derive(Clone, Debug)]
pub struct CoverChecker<R> {
    row_columns: HashMap<R, Vec<usize>>,
    column_names: Vec<String>,
    optional: BitVec,
}

impl<R> CoverChecker<R>
where
    R: Clone + Eq + Hash + Debug,
{
    /// Record which columns every row of `matrix` touches
    pub fn from_matrix<C>(matrix: &Matrix<R, C>) -> Self
    where
        C: Clone + Eq + Hash + Debug,
    {
        let row_columns = matrix
            .rows()
            .map(|row| {
                let mut ordinals = matrix.row_ordinals(row);
                ordinals.sort_unstable();
                ordinals.dedup();
                (row.clone(), ordinals)
            })
            .collect();
        let column_names = matrix
            .columns()
            .into_iter()
            .map(|(name, _)| format!("{name:?}"))
            .collect();

        Self {
            row_columns,
            column_names,
            optional: matrix.optional_columns().to_bitvec(),
        }
    }

    fn column_name(&self, ordinal: usize) -> &str {
        self.column_names.get(ordinal).map_or("?", String::as_str)
    }

    /// Check that `rows` cover every mandatory column exactly once and every
    /// optional column at most once
    ///
    /// # Errors
    ///
    /// Returns [`DlxError::InvalidCover`](crate::DlxError::InvalidCover)
    /// naming the first unknown row, doubly covered column, or uncovered
    /// mandatory column.
    pub fn check(&self, rows: &[R]) -> Result<()> {
        let mut seen = bitvec![0; self.column_names.len()];

        for row in rows {
            let Some(ordinals) = self.row_columns.get(row) else {
                return Err(invalid_cover(&format!("row {row:?} is not in the matrix")));
            };
            for &ordinal in ordinals {
                if seen.get(ordinal).as_deref() == Some(&true) {
                    return Err(invalid_cover(&format!(
                        "column {} is covered more than once",
                        self.column_name(ordinal)
                    )));
                }
                seen.set(ordinal, true);
            }
        }

        let uncovered = seen
            .iter()
            .by_vals()
            .zip(self.optional.iter().by_vals())
            .position(|(covered, optional)| !covered && !optional);
        match uncovered {
            Some(ordinal) => Err(invalid_cover(&format!(
                "column {} is not covered",
                self.column_name(ordinal)
            ))),
            None => Ok(()),
        }
    }
}
