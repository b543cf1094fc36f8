//! Command-line interface for solving puzzle files in batch

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::io::config::{OUTPUT_SUFFIX, PUZZLE_EXTENSION};
use crate::io::error::{Result, SolverError};
use crate::io::interactive;
use crate::io::progress::ProgressManager;
use crate::io::puzzle::parse_board;
use crate::io::render::write_solution;
use crate::search::{Exhaustion, SearchContext, SearchLimits, SearchOutcome, astar, dfs};

/// Search strategy selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Best-first search on depth plus the travel heuristic
    AStar,
    /// Depth-first search
    Dfs,
}

#[derive(Parser)]
#[command(name = "huarong")]
#[command(
    author,
    version,
    about = "Solve Hua Rong Dao sliding block puzzles"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Input puzzle file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Search strategy to run
    #[arg(short, long, value_enum, default_value = "a-star")]
    pub algorithm: Algorithm,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if a solution file exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Abort a solve after this many expanded nodes
    #[arg(long, value_name = "NODES")]
    pub max_nodes: Option<u64>,

    /// Abort a solve after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Play the puzzle manually instead of solving it
    #[arg(short, long)]
    pub interactive: bool,
}

impl Cli {
    /// Check if existing solution files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Limits for one solve, with the deadline anchored at the call
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_nodes: self.max_nodes,
            deadline: self
                .timeout
                .map(|seconds| Instant::now() + Duration::from_secs(seconds)),
        }
    }
}

/// Orchestrates batch solving of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, parsing, filesystem access or
    /// an interactive session fails. A solve ending in `NoSolution` is a
    /// reported outcome, not an error.
    pub fn process(&mut self) -> Result<()> {
        if self.cli.interactive {
            return self.play_interactively();
        }

        let files = self.collect_files()?;
        for file in &files {
            self.process_file(file)?;
        }

        if let Some(pm) = &self.progress {
            pm.finish();
        }
        Ok(())
    }

    fn play_interactively(&self) -> Result<()> {
        if !self.cli.target.is_file() {
            return Err(SolverError::InvalidParameter {
                parameter: "target",
                value: self.cli.target.display().to_string(),
                reason: "interactive play needs a single puzzle file".to_string(),
            });
        }
        let board = parse_board(&read_puzzle(&self.cli.target)?)?;

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        interactive::play(&board, &mut stdin.lock(), &mut stdout.lock())?;
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_puzzle_file(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(SolverError::InvalidParameter {
                    parameter: "target",
                    value: self.cli.target.display().to_string(),
                    reason: format!("target file must be a .{PUZZLE_EXTENSION} puzzle"),
                })
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).map_err(|source| {
                SolverError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "directory listing",
                    source,
                }
            })? {
                let path = entry
                    .map_err(|source| SolverError::FileSystem {
                        path: self.cli.target.clone(),
                        operation: "directory listing",
                        source,
                    })?
                    .path();
                if is_puzzle_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(SolverError::InvalidParameter {
                parameter: "target",
                value: self.cli.target.display().to_string(),
                reason: format!("target must be a .{PUZZLE_EXTENSION} file or directory"),
            })
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (solution exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::output_path(input_path);

        let board = parse_board(&read_puzzle(input_path)?)?;
        if let Some(pm) = &self.progress {
            pm.start_file(input_path);
        }

        let limits = self.cli.limits();
        let algorithm = self.cli.algorithm;
        let (outcome, stats) = {
            let mut ctx = SearchContext::with_limits(limits);
            if let Some(pm) = self.progress.as_mut() {
                ctx = ctx.with_sink(pm);
            }
            let outcome = match algorithm {
                Algorithm::AStar => astar::solve(&board, &mut ctx),
                Algorithm::Dfs => dfs::solve(&board, &mut ctx),
            };
            (outcome, ctx.stats)
        };
        let elapsed = start_time.elapsed();

        let name = input_path.display();
        match outcome {
            SearchOutcome::Solved(solution) => {
                write_solution(&output_path, &solution)?;
                self.report(&format!(
                    "Solved {name}: {} moves, {} nodes expanded, {} ms -> {}",
                    solution.depth,
                    stats.expanded,
                    elapsed.as_millis(),
                    output_path.display()
                ));
            }
            SearchOutcome::NoSolution(cause) => {
                self.report(&format!(
                    "No solution for {name} ({}), {} nodes expanded, {} ms",
                    describe_exhaustion(cause),
                    stats.expanded,
                    elapsed.as_millis()
                ));
            }
        }
        Ok(())
    }

    // Route through the progress display so the spinner line stays intact
    #[allow(clippy::print_stderr)]
    fn report(&self, message: &str) {
        if let Some(pm) = &self.progress {
            pm.println(message);
        } else if !self.cli.quiet {
            eprintln!("{message}");
        }
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

const fn describe_exhaustion(cause: Exhaustion) -> &'static str {
    match cause {
        Exhaustion::FrontierEmptied => "frontier exhausted",
        Exhaustion::BudgetExceeded => "budget exceeded",
    }
}

fn is_puzzle_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION)
        && !path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

fn read_puzzle(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SolverError::PuzzleLoad {
        path: path.to_path_buf(),
        source,
    })
}
