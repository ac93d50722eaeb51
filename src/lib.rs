//! Exact cover solving with Knuth's dancing links
//!
//! A [`Matrix`] is built from `(row, column)` pairs, with some columns
//! optionally marked "at most once". Algorithm X then enumerates the exact
//! covers through a pair of terminal hooks, rows can be selected and
//! deselected by hand, and random samples estimate how large the search tree
//! is before committing to a full enumeration.

#![forbid(unsafe_code)]

/// Dancing links core: cell arena, covering, search, selection and sampling
pub mod algorithm;
/// Result processing: tallies, tree-size estimates and cover verification
pub mod analysis;
/// Cover files, command-line driver, progress display and error handling
pub mod io;
/// Builders for puzzle instances reducible to exact cover
pub mod puzzles;

pub use algorithm::matrix::{CoverToken, Matrix};
pub use algorithm::sampler::{Outcome, Sample};
pub use algorithm::search::{Callbacks, Terminal};
pub use io::error::{DlxError, Result};
