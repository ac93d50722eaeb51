//! Search terminals that count or collect solutions

use crate::algorithm::search::Terminal;
use std::collections::BTreeMap;

/// Counts solutions by number of rows, plus dead ends
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionTally {
    by_length: BTreeMap<usize, u64>,
    dead_ends: u64,
}

impl SolutionTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Solution counts keyed by solution length, shortest first
    pub const fn by_length(&self) -> &BTreeMap<usize, u64> {
        &self.by_length
    }

    /// Total number of solutions seen
    pub fn total(&self) -> u64 {
        self.by_length.values().sum()
    }

    /// Number of dead ends seen
    pub const fn dead_ends(&self) -> u64 {
        self.dead_ends
    }
}

impl<R> Terminal<R> for SolutionTally {
    fn on_solution(&mut self, rows: &[R]) -> bool {
        *self.by_length.entry(rows.len()).or_insert(0) += 1;
        true
    }

    fn on_dead_end(&mut self) -> bool {
        self.dead_ends += 1;
        true
    }
}

/// Stores every solution, optionally stopping after a fixed number
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionCollector<R> {
    solutions: Vec<Vec<R>>,
    limit: Option<usize>,
}

impl<R> Default for SolutionCollector<R> {
    fn default() -> Self {
        Self {
            solutions: Vec::new(),
            limit: None,
        }
    }
}

impl<R> SolutionCollector<R> {
    /// Collect all solutions
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the search once `limit` solutions have been collected
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            solutions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Solutions in the order they were found
    pub fn solutions(&self) -> &[Vec<R>] {
        &self.solutions
    }

    /// Take ownership of the collected solutions
    pub fn into_solutions(self) -> Vec<Vec<R>> {
        self.solutions
    }
}

impl<R: Clone> Terminal<R> for SolutionCollector<R> {
    fn on_solution(&mut self, rows: &[R]) -> bool {
        self.solutions.push(rows.to_vec());
        self.limit.is_none_or(|limit| self.solutions.len() < limit)
    }
}
