//! Live search progress display
//!
//! A single spinner fed by the search context's [`ProgressSink`] hook;
//! the stride throttling happens in the context, so updates here stay
//! cheap enough for tight search loops.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use crate::io::config::PROGRESS_TICK_MS;
use crate::search::{ProgressSink, SearchStats};

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner display for a running solve
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with a steadily ticking spinner
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar }
    }

    /// Announce the file being solved
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_prefix(display_name);
        self.bar.set_message("starting");
    }

    /// Print a line above the spinner without disturbing it
    pub fn println(&self, message: &str) {
        self.bar.println(message);
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for ProgressManager {
    fn on_progress(&mut self, stats: &SearchStats) {
        self.bar.set_message(format!(
            "expanded {} | generated {} | frontier peak {}",
            stats.expanded, stats.generated, stats.frontier_peak
        ));
    }
}
