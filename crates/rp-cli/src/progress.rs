use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::ui;

/// A stderr spinner that does nothing when progress display is off.
pub struct Progress {
    bar: Option<ProgressBar>,
}

static MULTI_PROGRESS: OnceLock<MultiProgress> = OnceLock::new();

fn multi_progress() -> &'static MultiProgress {
    MULTI_PROGRESS.get_or_init(MultiProgress::new)
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = multi_progress().add(ProgressBar::new_spinner());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    pub fn finish_ok(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }

    /// Pass `result` through, abandoning the spinner with `failure` if it is
    /// an error.
    pub fn guard<T, E>(&self, result: Result<T, E>, failure: &str) -> Result<T, E> {
        result.inspect_err(|_| self.finish_err(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden() -> (Progress, ProgressBar) {
        let bar = ProgressBar::hidden();
        bar.set_message("working");
        (
            Progress {
                bar: Some(bar.clone()),
            },
            bar,
        )
    }

    #[test]
    fn failed_step_abandons_spinner() {
        let (progress, bar) = hidden();
        let result: Result<(), &str> = progress.guard(Err("walk failed"), "discovery failed");

        assert!(result.is_err());
        assert!(bar.is_finished());
        assert_eq!(bar.message(), "discovery failed");
    }

    #[test]
    fn successful_step_leaves_spinner_running() {
        let (progress, bar) = hidden();
        let value = progress.guard(Ok::<_, &str>(3), "discovery failed");

        assert_eq!(value, Ok(3));
        assert!(!bar.is_finished());
        assert_eq!(bar.message(), "working");
    }

    #[test]
    fn disabled_spinner_passes_errors_through() {
        let progress = Progress { bar: None };
        assert_eq!(progress.guard::<(), _>(Err("x"), "failed"), Err("x"));
    }
}
