//! Spinner shown while the solver blocks

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
});

/// Spinner around a single blocking step
///
/// A disabled spinner draws nothing, so callers need not branch on `--quiet`.
pub struct SolveProgress {
    bar: Option<ProgressBar>,
}

impl SolveProgress {
    /// Start spinning with `message`, or stay silent when `enabled` is false
    pub fn start(enabled: bool, message: &str) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            bar.set_message(message.to_string());
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            bar
        });
        Self { bar }
    }

    /// Whether anything is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Stop spinning and leave `message` on screen
    pub fn finish(&self, message: &str) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    /// Stop spinning and erase the line
    pub fn clear(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
