use super::*;
use crate::data::find_choice;

#[test]
fn correlation_data_has_eight_zones() {
    assert_eq!(CORRELATION_DATA.len(), 8);
    assert!(TREND_SAMPLE_LEN <= CORRELATION_DATA.len());
}

#[test]
fn correlation_data_trends_negative() {
    let warmest = CORRELATION_DATA.iter().max_by(|a, b| a.temperature.total_cmp(&b.temperature));
    let coolest = CORRELATION_DATA.iter().min_by(|a, b| a.temperature.total_cmp(&b.temperature));
    let (Some(warm), Some(cool)) = (warmest, coolest) else {
        panic!("table is empty");
    };
    assert!(warm.diversity < cool.diversity);
}

#[test]
fn headline_stats_are_fixed() {
    assert_eq!(HEADLINE_STATS.correlation, "-0.78");
    assert_eq!(HEADLINE_STATS.r_squared, "0.61");
    assert_eq!(HEADLINE_STATS.significance, "p < 0.001");
}

#[test]
fn axis_option_lists_have_expected_defaults() {
    assert_eq!(X_AXIS_OPTIONS[0].value, "temperature");
    assert_eq!(Y_AXIS_OPTIONS[0].value, "diversity");
    assert_eq!(find_choice(X_AXIS_OPTIONS, "depth").map(|c| c.label), Some("Depth (m)"));
    assert_eq!(find_choice(Y_AXIS_OPTIONS, "depth"), None);
}

#[test]
fn tables_are_populated() {
    assert_eq!(AI_INSIGHTS.len(), 4);
    assert_eq!(ANALYSIS_TEMPLATES.len(), 4);
    assert_eq!(MODEL_PERFORMANCE.len(), 4);
    assert!(ANALYSIS_TEMPLATES.iter().all(|t| t.variables.len() == 3));
}
