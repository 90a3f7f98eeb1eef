//! Spinner shown while a blocking uv command runs

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for package manager steps
pub struct Progress {
    /// Disabled in quiet and JSON modes
    enabled: bool,
    /// Spinner of the running step
    bar: Option<ProgressBar>,
    /// Steps finished so far
    completed: usize,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: None,
            completed: 0,
        }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Number of steps that have finished, successfully or not
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Run `step` while a spinner shows `message`.
    ///
    /// The spinner is cleared before the result is returned so error output
    /// is not interleaved with it.
    pub fn wrap<T, E>(
        &mut self,
        message: &str,
        step: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        self.start(message);
        let result = step();
        self.finish();
        result
    }

    fn start(&mut self, message: &str) {
        if !self.enabled {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid template"),
        );
        spinner.set_message(format!("{}...", message));
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(spinner);
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        self.completed += 1;
    }
}
