//! Random sampling of the search tree (Knuth's estimator)
//!
//! A sample walks one random root-to-leaf path, branching on the same column
//! the search would choose and picking each candidate with equal probability.
//! The product of the branching degrees along the path is an unbiased
//! estimate of the number of leaves below the starting point.

use crate::algorithm::matrix::Matrix;
use rand::Rng;
use std::hash::Hash;

/// How a sample ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every mandatory column was covered
    Solution,
    /// Some mandatory column ran out of candidates
    DeadEnd,
}

/// Branching degrees met along one random path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Candidate count of the chosen column at each step, root first
    pub degrees: Vec<usize>,
    /// Kind of leaf the path reached
    pub outcome: Outcome,
}

impl Sample {
    /// Number of rows selected along the path
    pub fn depth(&self) -> usize {
        self.degrees.len()
    }

    /// True when the path ended in an exact cover
    pub fn is_solution(&self) -> bool {
        self.outcome == Outcome::Solution
    }
}

impl<R, C> Matrix<R, C>
where
    R: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
{
    /// Walk one random path down from the current selection
    ///
    /// Rows are pushed on the way down and popped again before returning,
    /// so the matrix and the selection are unchanged afterwards.
    pub fn sample<G>(&mut self, rng: &mut G) -> Sample
    where
        G: Rng + ?Sized,
    {
        let base = self.selection().len();
        let mut degrees = Vec::new();

        let outcome = loop {
            let Some(header) = self.choose_column() else {
                break Outcome::Solution;
            };
            let size = self.fabric.size(header);
            if size == 0 {
                break Outcome::DeadEnd;
            }

            degrees.push(size);
            let child = rng.random_range(0..size);
            let row = self
                .fabric
                .column_ring(header)
                .nth(child)
                .and_then(|cell| self.fabric.row(cell))
                .cloned();
            let Some(row) = row else {
                break Outcome::DeadEnd;
            };
            self.push(row);
        };

        while self.selection().len() > base {
            self.pop();
        }

        Sample { degrees, outcome }
    }
}
