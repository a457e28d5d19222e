use super::*;

fn run_to_end(task: &mut ProgressTask) -> Vec<u8> {
    let mut seen = Vec::new();
    for _ in 0..1_000 {
        if !task.is_running() {
            break;
        }
        task.tick();
        seen.push(task.value());
    }
    seen
}

#[test]
fn new_task_is_idle_at_zero() {
    let task = ProgressTask::new(UPLOAD_PROFILE);
    assert_eq!(task.value(), 0);
    assert_eq!(task.phase(), ProgressPhase::Idle);
    assert_eq!(task.completions(), 0);
}

#[test]
fn tick_is_noop_before_start() {
    let mut task = ProgressTask::new(UPLOAD_PROFILE);
    assert!(!task.tick());
    assert_eq!(task.value(), 0);
    assert_eq!(task.phase(), ProgressPhase::Idle);
}

#[test]
fn upload_profile_climbs_in_steps_of_ten() {
    let mut task = ProgressTask::new(UPLOAD_PROFILE);
    assert!(task.start());
    assert_eq!(task.value(), 0);

    let seen = run_to_end(&mut task);
    assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    assert!(task.is_complete());
}

#[test]
fn sequence_search_profile_clamps_final_step_at_100() {
    let mut task = ProgressTask::new(SEQUENCE_SEARCH_PROFILE);
    task.start();
    let seen = run_to_end(&mut task);

    assert_eq!(seen.first(), Some(&8));
    assert_eq!(seen[seen.len() - 2], 96);
    assert_eq!(seen.last(), Some(&100));
    assert!(seen.iter().all(|v| *v <= PROGRESS_MAX));
}

#[test]
fn progress_is_monotonic_and_completes_exactly_once() {
    for profile in [UPLOAD_PROFILE, SEQUENCE_SEARCH_PROFILE] {
        let mut task = ProgressTask::new(profile);
        task.start();

        let mut last = task.value();
        let mut completing_ticks = 0;
        for _ in 0..100 {
            if task.tick() {
                completing_ticks += 1;
            }
            assert!(task.value() >= last);
            last = task.value();
        }

        assert_eq!(completing_ticks, 1);
        assert_eq!(task.completions(), 1);
        assert_eq!(task.value(), 100);
    }
}

#[test]
fn completion_flag_flips_on_the_tick_that_reaches_100() {
    let mut task = ProgressTask::new(UPLOAD_PROFILE);
    task.start();
    for _ in 0..9 {
        assert!(!task.tick());
        assert!(task.is_running());
    }
    assert!(task.tick());
    assert_eq!(task.value(), 100);
    assert!(!task.is_running());
    assert!(task.is_complete());
}

#[test]
fn start_while_running_is_rejected() {
    let mut task = ProgressTask::new(UPLOAD_PROFILE);
    assert!(task.start());
    task.tick();
    task.tick();

    assert!(!task.start());
    assert_eq!(task.value(), 20);
    assert!(task.is_running());
}

#[test]
fn completed_task_can_restart_from_zero() {
    let mut task = ProgressTask::new(UPLOAD_PROFILE);
    task.start();
    run_to_end(&mut task);

    assert!(task.start());
    assert_eq!(task.value(), 0);
    assert!(task.is_running());

    run_to_end(&mut task);
    assert_eq!(task.completions(), 2);
}

#[test]
fn cancel_stops_run_without_completing() {
    let mut task = ProgressTask::new(SEQUENCE_SEARCH_PROFILE);
    task.start();
    task.tick();
    task.cancel();

    assert_eq!(task.phase(), ProgressPhase::Idle);
    assert!(!task.tick());
    assert_eq!(task.value(), 8);
    assert_eq!(task.completions(), 0);
}

#[test]
fn cancel_after_completion_keeps_complete_phase() {
    let mut task = ProgressTask::new(UPLOAD_PROFILE);
    task.start();
    run_to_end(&mut task);
    task.cancel();
    assert!(task.is_complete());
}
