//! Simulated long-running task (file upload, sequence search).
//!
//! DESIGN
//! ======
//! The task is a pure state machine advanced by `tick()`; the interval that
//! drives it lives in `util::ticker` so the counting rules can be tested
//! without a browser. Starts are serialized: a running task rejects a second
//! `start()` instead of spawning an overlapping timer.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Upper bound for [`ProgressTask::value`].
pub const PROGRESS_MAX: u8 = 100;

/// Step size and tick period for one kind of simulated task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressProfile {
    pub step: u8,
    pub interval_ms: u64,
}

/// Dataset upload in the data integration module.
pub const UPLOAD_PROFILE: ProgressProfile = ProgressProfile { step: 10, interval_ms: 300 };

/// BLAST-style sequence search in the eDNA module.
pub const SEQUENCE_SEARCH_PROFILE: ProgressProfile = ProgressProfile { step: 8, interval_ms: 500 };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressPhase {
    #[default]
    Idle,
    Running,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressTask {
    profile: ProgressProfile,
    value: u8,
    phase: ProgressPhase,
    completions: u32,
}

impl ProgressTask {
    #[must_use]
    pub fn new(profile: ProgressProfile) -> Self {
        Self { profile, value: 0, phase: ProgressPhase::Idle, completions: 0 }
    }

    /// Begin a run from zero. Returns `false` if a run is already in flight.
    pub fn start(&mut self) -> bool {
        if self.phase == ProgressPhase::Running {
            log::debug!("progress start ignored: task already running");
            return false;
        }
        self.value = 0;
        self.phase = ProgressPhase::Running;
        true
    }

    /// Advance one step. Returns `true` only on the tick that completes the run.
    pub fn tick(&mut self) -> bool {
        if self.phase != ProgressPhase::Running {
            return false;
        }
        self.value = self.value.saturating_add(self.profile.step).min(PROGRESS_MAX);
        if self.value < PROGRESS_MAX {
            return false;
        }
        self.phase = ProgressPhase::Complete;
        self.completions += 1;
        true
    }

    /// Abandon an in-flight run without completing it.
    pub fn cancel(&mut self) {
        if self.phase == ProgressPhase::Running {
            self.phase = ProgressPhase::Idle;
        }
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    #[must_use]
    pub fn profile(&self) -> ProgressProfile {
        self.profile
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == ProgressPhase::Running
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == ProgressPhase::Complete
    }

    /// Number of runs that have reached 100 since construction.
    #[must_use]
    pub fn completions(&self) -> u32 {
        self.completions
    }
}
