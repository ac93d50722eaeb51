//! Live progress display for search and sampling runs

use crate::io::configuration::{PROGRESS_REFRESH_INTERVAL, PROGRESS_TEMPLATE, PROGRESS_TICK_MS};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting solutions, dead ends and sampling estimates
///
/// Counters are updated on every event but the message is only rebuilt
/// every [`PROGRESS_REFRESH_INTERVAL`] events, keeping the hot search loop
/// cheap.
pub struct SearchProgress {
    bar: ProgressBar,
    solutions: u64,
    dead_ends: u64,
    events: u64,
}

impl SearchProgress {
    /// Create a spinner drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self::with_bar(bar)
    }

    /// Create a progress tracker that never draws
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()))
    }

    const fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            solutions: 0,
            dead_ends: 0,
            events: 0,
        }
    }

    /// Solutions reported so far
    pub const fn solutions(&self) -> u64 {
        self.solutions
    }

    /// Dead ends reported so far
    pub const fn dead_ends(&self) -> u64 {
        self.dead_ends
    }

    /// Record one solution
    pub fn solution(&mut self) {
        self.solutions += 1;
        self.tick();
    }

    /// Record one dead end
    pub fn dead_end(&mut self) {
        self.dead_ends += 1;
        self.tick();
    }

    fn tick(&mut self) {
        self.events += 1;
        if self.events % PROGRESS_REFRESH_INTERVAL == 0 {
            self.bar.set_message(format!(
                "{} solutions, {} dead ends",
                self.solutions, self.dead_ends
            ));
        }
    }

    /// Show the running estimate after a batch of samples
    pub fn estimate(&self, samples: u64, average: f64) {
        self.bar
            .set_message(format!("{samples} samples, estimate {average:.6e}"));
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}
