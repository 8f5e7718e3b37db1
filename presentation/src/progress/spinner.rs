//! Spinner shown while the resolution chain runs.
//!
//! Resolution may walk several remote providers and a web search, each
//! bounded by the HTTP timeout, so a spinner keeps the terminal alive.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ResolutionSpinner {
    bar: Option<ProgressBar>,
}

impl ResolutionSpinner {
    /// Start spinning with `message`. A disabled spinner draws nothing.
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Remove the spinner line.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}
