//! Driver constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Samples drawn between two printed estimates
pub const DEFAULT_BATCH_SIZE: usize = 100;

// Progress display settings
/// Terminal events (solutions, dead ends, samples) between spinner redraws
pub const PROGRESS_REFRESH_INTERVAL: u64 = 4096;
/// Spinner redraw period while idle, in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;
/// Spinner template for search and sampling progress
pub const PROGRESS_TEMPLATE: &str = "{spinner:.cyan} [{elapsed_precise}] {msg}";
