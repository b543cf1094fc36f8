//! Runtime configuration defaults for the command-line tool

// Output settings
/// Suffix added to solution filenames
pub const OUTPUT_SUFFIX: &str = "_solution";
/// File extension of puzzle inputs
pub const PUZZLE_EXTENSION: &str = "txt";

// Progress display settings
/// Spinner tick interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 100;
