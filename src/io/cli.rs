//! Command-line driver: load a cover file, then search or estimate

use crate::algorithm::search::Terminal;
use crate::analysis::estimate::TreeEstimate;
use crate::analysis::tally::SolutionTally;
use crate::analysis::verify::CoverChecker;
use crate::io::configuration::{DEFAULT_BATCH_SIZE, DEFAULT_SEED};
use crate::io::cover_file::CoverFile;
use crate::io::error::{DlxError, Result, invalid_parameter};
use crate::io::progress::SearchProgress;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::PathBuf;

/// What to do with the loaded instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Count solutions grouped by number of rows
    Count,
    /// Print every solution as a line of row ids
    List,
    /// Print running random-sample estimates of the search tree size
    Estimate,
}

#[derive(Parser, Debug)]
#[command(name = "dlxcover")]
#[command(
    author,
    version,
    about = "Solve exact cover problems with dancing links, or estimate their search trees"
)]
/// Command-line arguments for the solver
pub struct Cli {
    /// Cover file: entry count, row/column pairs, optional count, optional columns
    #[arg(value_name = "COVER_FILE")]
    pub target: PathBuf,

    /// Operation to run on the instance
    #[arg(short, long, value_enum, default_value_t = Mode::Count)]
    pub mode: Mode,

    /// Estimate nodes at this depth instead of leaves (estimate mode, 0 = leaves)
    #[arg(short, long, default_value_t = 0)]
    pub depth: usize,

    /// Samples per printed estimate
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Stop after this many batches (runs until interrupted when absent)
    #[arg(short = 'n', long)]
    pub batches: Option<usize>,

    /// Random seed for reproducible estimates
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Check every listed solution is an exact cover
    #[arg(short, long)]
    pub verify: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Depth limit for estimates, `None` meaning full paths
    pub const fn depth_limit(&self) -> Option<usize> {
        if self.depth == 0 {
            None
        } else {
            Some(self.depth)
        }
    }

    /// Reject parameter combinations that cannot run
    ///
    /// # Errors
    ///
    /// Returns [`DlxError::InvalidParameter`] for a zero batch size or zero
    /// batch limit.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(invalid_parameter(
                "batch_size",
                &self.batch_size,
                &"must be at least 1",
            ));
        }
        if self.batches == Some(0) {
            return Err(invalid_parameter("batches", &0, &"must be at least 1"));
        }
        Ok(())
    }
}

/// Runs one command line against one cover file
pub struct Driver {
    cli: Cli,
    progress: SearchProgress,
}

/// Writes each solution as it is found, optionally verifying it
struct SolutionWriter<'a, W: ?Sized> {
    out: &'a mut W,
    checker: Option<CoverChecker<i32>>,
    progress: &'a mut SearchProgress,
    error: Option<DlxError>,
}

impl<W: Write + ?Sized> Terminal<i32> for SolutionWriter<'_, W> {
    fn on_solution(&mut self, rows: &[i32]) -> bool {
        self.progress.solution();
        if let Some(checker) = &self.checker {
            if let Err(error) = checker.check(rows) {
                self.error = Some(error);
                return false;
            }
        }

        let written = rows
            .iter()
            .try_for_each(|row| write!(self.out, " {row}"))
            .and_then(|()| writeln!(self.out));
        match written {
            Ok(()) => true,
            Err(source) => {
                self.error = Some(DlxError::Output { source });
                false
            }
        }
    }

    fn on_dead_end(&mut self) -> bool {
        self.progress.dead_end();
        true
    }
}

/// Tally that also feeds the progress display
struct CountingTerminal<'a> {
    tally: SolutionTally,
    progress: &'a mut SearchProgress,
}

impl Terminal<i32> for CountingTerminal<'_> {
    fn on_solution(&mut self, rows: &[i32]) -> bool {
        self.progress.solution();
        self.tally.on_solution(rows)
    }

    fn on_dead_end(&mut self) -> bool {
        self.progress.dead_end();
        Terminal::<i32>::on_dead_end(&mut self.tally)
    }
}

impl Driver {
    /// Create a driver for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        };
        Self { cli, progress }
    }

    /// Load the cover file and run the selected mode, writing results to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid, the cover file cannot be
    /// read or parsed, a verified solution is not an exact cover, or writing
    /// to `out` fails.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        self.cli.validate()?;
        let cover = CoverFile::from_path(&self.cli.target)?;
        self.report_loaded(&cover);

        let result = match self.cli.mode {
            Mode::Count => self.count(&cover, out),
            Mode::List => self.list(&cover, out),
            Mode::Estimate => self.estimate(&cover, out),
        };
        self.progress.finish();
        result
    }

    // Allow print for user feedback about the loaded instance
    #[allow(clippy::print_stderr)]
    fn report_loaded(&self, cover: &CoverFile) {
        if !self.cli.quiet {
            eprintln!(
                "Loaded {} entries and {} optional columns from {}",
                cover.pairs.len(),
                cover.optional.len(),
                self.cli.target.display()
            );
        }
    }

    fn count<W: Write + ?Sized>(&mut self, cover: &CoverFile, out: &mut W) -> Result<()> {
        let mut matrix = cover.build();
        let mut terminal = CountingTerminal {
            tally: SolutionTally::new(),
            progress: &mut self.progress,
        };
        matrix.search(&mut terminal);

        for (length, count) in terminal.tally.by_length() {
            writeln!(out, "{length} {count}").map_err(|source| DlxError::Output { source })?;
        }
        Ok(())
    }

    fn list<W: Write + ?Sized>(&mut self, cover: &CoverFile, out: &mut W) -> Result<()> {
        let mut matrix = cover.build();
        let checker = self.cli.verify.then(|| CoverChecker::from_matrix(&matrix));
        let mut writer = SolutionWriter {
            out,
            checker,
            progress: &mut self.progress,
            error: None,
        };
        matrix.search(&mut writer);

        writer.error.map_or(Ok(()), Err)
    }

    fn estimate<W: Write + ?Sized>(&mut self, cover: &CoverFile, out: &mut W) -> Result<()> {
        let mut matrix = cover.build();
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut estimate = TreeEstimate::new();
        let depth = self.cli.depth_limit();

        let mut batch = 0;
        while self.cli.batches.is_none_or(|limit| batch < limit) {
            for _ in 0..self.cli.batch_size {
                let sample = matrix.sample(&mut rng);
                estimate.record(&sample.degrees, depth);
            }
            batch += 1;

            writeln!(out, "{} {}", estimate.samples(), estimate.average())
                .map_err(|source| DlxError::Output { source })?;
            self.progress.estimate(estimate.samples(), estimate.average());
        }
        Ok(())
    }
}
