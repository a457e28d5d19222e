use super::*;
use crate::state::progress::UPLOAD_PROFILE;

#[test]
fn new_handle_is_active_until_cancelled() {
    let handle = TickerHandle::new();
    assert!(handle.is_active());
    handle.cancel();
    assert!(!handle.is_active());
}

#[test]
fn clones_share_cancellation() {
    let handle = TickerHandle::default();
    let loop_side = handle.clone();
    handle.cancel();
    assert!(!loop_side.is_active());
}

#[test]
fn start_is_serialized_per_task() {
    let owner = Owner::new();
    owner.with(|| {
        let task = RwSignal::new(ProgressTask::new(UPLOAD_PROFILE));
        let handle = TickerHandle::new();
        assert!(start(task, &handle));
        assert!(!start(task, &handle));
        assert!(task.get_untracked().is_running());
    });
}

#[test]
fn cancelled_handle_refuses_to_start() {
    let owner = Owner::new();
    owner.with(|| {
        let task = RwSignal::new(ProgressTask::new(UPLOAD_PROFILE));
        let handle = TickerHandle::new();
        handle.cancel();
        assert!(!start(task, &handle));
        assert!(!task.get_untracked().is_running());
    });
}
