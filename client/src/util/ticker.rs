//! Browser timer that advances a [`ProgressTask`] signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views own one [`TickerHandle`] and cancel it from `on_cleanup`. The tick
//! loop checks the handle after every sleep and also stops once the task
//! leaves `Running` or its signal has been disposed, so no tick lands on an
//! unmounted view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::progress::ProgressTask;

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

/// Shared liveness flag for tick loops spawned by one view.
#[derive(Clone, Debug)]
pub struct TickerHandle {
    alive: Arc<AtomicBool>,
}

impl Default for TickerHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Start `task` and spawn its tick loop. Returns `false` when the task was
/// already running (the existing loop keeps going) or the handle is cancelled.
pub fn start(task: RwSignal<ProgressTask>, handle: &TickerHandle) -> bool {
    if !handle.is_active() {
        return false;
    }
    let started = task.try_update(ProgressTask::start).unwrap_or(false);
    if started {
        drive(task, handle);
    }
    started
}

#[cfg(feature = "hydrate")]
fn drive(task: RwSignal<ProgressTask>, handle: &TickerHandle) {
    let handle = handle.clone();
    let interval = std::time::Duration::from_millis(task.with_untracked(|t| t.profile().interval_ms));
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(interval).await;
            if !handle.is_active() {
                break;
            }
            let running = task.try_update(|t| {
                if t.tick() {
                    log::info!("simulated task complete ({} runs)", t.completions());
                }
                t.is_running()
            });
            if running != Some(true) {
                break;
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn drive(_task: RwSignal<ProgressTask>, _handle: &TickerHandle) {}
