//! Phase-based progress display for the mosaic pipeline

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display across the pipeline's two heavy phases:
/// source pool construction and per-cell matching
pub struct ProgressManager {
    multi_progress: MultiProgress,
    active: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>12} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager with no active phase
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            active: None,
        }
    }

    /// Begin a named phase with a known number of work units
    ///
    /// Any previously active phase bar is finished first.
    pub fn start_phase(&mut self, label: &'static str, total: u64) {
        self.finish_phase();
        let bar = ProgressBar::new(total);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_message(label);
        self.active = Some(self.multi_progress.add(bar));
    }

    /// Record one completed work unit in the active phase
    pub fn tick(&self) {
        if let Some(bar) = &self.active {
            bar.inc(1);
        }
    }

    /// Complete the active phase, leaving its bar at 100%
    pub fn finish_phase(&mut self) {
        if let Some(bar) = self.active.take() {
            bar.finish();
        }
    }
}
