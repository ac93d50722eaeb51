//! Result processing for searches and samples

/// Running tree-size estimates from random samples
pub mod estimate;
/// Terminals counting and collecting solutions
pub mod tally;
/// Exact cover validation of reported solutions
pub mod verify;
