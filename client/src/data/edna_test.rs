use super::*;

#[test]
fn detection_summary_matches_table() {
    assert_eq!(DETECTION_RESULTS.len(), 5);
    assert_eq!(total_reads(DETECTION_RESULTS), 3072);
    assert_eq!(confirmed_count(DETECTION_RESULTS), 3);
}

#[test]
fn relative_abundance_of_top_species() {
    let total = total_reads(DETECTION_RESULTS);
    let share = relative_abundance(1247, total);
    assert!((share - 40.592).abs() < 0.01);
    assert_eq!(format!("{share:.1}"), "40.6");
}

#[test]
fn relative_abundances_sum_to_one_hundred() {
    let total = total_reads(DETECTION_RESULTS);
    let sum: f64 = DETECTION_RESULTS.iter().map(|d| relative_abundance(d.reads, total)).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn relative_abundance_with_no_reads_is_zero() {
    assert_eq!(relative_abundance(0, 0), 0.0);
    assert_eq!(total_reads(&[]), 0);
}

#[test]
fn workflow_has_five_steps_with_one_in_progress() {
    assert_eq!(PROCESSING_STEPS.len(), 5);
    let running = PROCESSING_STEPS.iter().filter(|s| s.status == StepStatus::InProgress).count();
    assert_eq!(running, 1);
}
