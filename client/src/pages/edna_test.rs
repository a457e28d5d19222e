use super::*;

#[test]
fn workflow_steps_badge_by_status() {
    assert_eq!(step_variant(StepStatus::Complete), BadgeVariant::Default);
    assert_eq!(step_variant(StepStatus::InProgress), BadgeVariant::Secondary);
    assert_eq!(step_variant(StepStatus::Pending), BadgeVariant::Outline);
}

#[test]
fn top_matches_badge_by_rank() {
    let variants: Vec<_> = (0..TOP_MATCHES.len()).map(match_variant).collect();
    assert_eq!(variants, [BadgeVariant::Default, BadgeVariant::Secondary, BadgeVariant::Outline]);
}

#[test]
fn detection_shares_render_with_one_decimal() {
    let total = total_reads(DETECTION_RESULTS);
    let first = DETECTION_RESULTS[0];
    assert_eq!(percent_one_decimal(relative_abundance(first.reads, total)), "40.6%");
}

#[test]
fn analysis_and_search_buttons_share_one_running_task() {
    let owner = Owner::new();
    owner.with(|| {
        let search = RwSignal::new(ProgressTask::new(SEQUENCE_SEARCH_PROFILE));
        let handle = TickerHandle::new();
        assert!(ticker::start(search, &handle));

        let running = search.with_untracked(ProgressTask::is_running);
        assert_eq!(analysis_button_label(running), "Analyzing...");
        assert_eq!(search_button_label(running), "Searching...");
        assert_eq!(search.with_untracked(ProgressTask::value), 0);

        search.update(|t| {
            t.tick();
        });
        assert_eq!(search.with_untracked(ProgressTask::value), 8);
        handle.cancel();
    });
}
