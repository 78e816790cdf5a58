//! Elapsed-time counter shown while working on a matrix.

use std::time::Instant;

/// Counts whole seconds since the current matrix was set.
///
/// Setting a matrix restarts it from zero; a reset stops it and it reads 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer {
    started: Option<Instant>,
}

impl Timer {
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs_at(Instant::now())
    }

    fn elapsed_secs_at(&self, now: Instant) -> u64 {
        self.started
            .map(|start| now.saturating_duration_since(start).as_secs())
            .unwrap_or(0)
    }

    pub fn label(&self) -> String {
        format!("Time: {} seconds", self.elapsed_secs())
    }
}
