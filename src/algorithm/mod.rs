/// Index-linked cell arena with O(1) ring splicing
pub mod fabric;
/// Sparse matrix, column and row registries, and reversible covering
pub mod matrix;
/// Random single-path samples estimating search tree size
pub mod sampler;
/// Backtracking enumeration of exact covers
pub mod search;
/// Stack of chosen rows with push and pop
pub mod selection;
