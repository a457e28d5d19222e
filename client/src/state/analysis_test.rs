use super::*;

#[test]
fn defaults_plot_temperature_against_diversity() {
    let controls = AnalysisControls::default();
    assert_eq!(controls.tab, AnalysisTab::Correlations);
    assert_eq!(controls.x_axis, "temperature");
    assert_eq!(controls.y_axis, "diversity");
    assert_eq!(controls.region, Some("all"));
    assert_eq!(controls.time_window, Some("12m"));
    assert_eq!(controls.data_source, None);
}

#[test]
fn selectors_record_known_values() {
    let mut controls = AnalysisControls::default();
    assert!(controls.select(Selector::XAxis, "depth"));
    assert!(controls.select(Selector::YAxis, "biomass"));
    assert!(controls.select(Selector::Region, "indian"));
    assert!(controls.select(Selector::TimeWindow, "5y"));
    assert_eq!(controls.x_axis, "depth");
    assert_eq!(controls.y_axis, "biomass");
    assert_eq!(controls.region, Some("indian"));
    assert_eq!(controls.time_window, Some("5y"));
}

#[test]
fn selectors_reject_values_from_other_lists() {
    let mut controls = AnalysisControls::default();
    assert!(!controls.select(Selector::XAxis, "diversity"));
    assert!(!controls.select(Selector::OutputFormat, "pdf"));
    assert_eq!(controls, AnalysisControls::default());
}

#[test]
fn changing_selectors_leaves_series_and_stats_unchanged() {
    let baseline = AnalysisControls::default();
    let before = baseline.correlation_series();
    let stats_before = baseline.headline_stats();

    let mut controls = AnalysisControls::default();
    controls.select(Selector::XAxis, "chlorophyll");
    controls.select(Selector::YAxis, "endemic");
    controls.select(Selector::Region, "mediterranean");
    controls.select(Selector::TimeWindow, "1m");

    assert_eq!(controls.correlation_series(), before);
    assert_eq!(controls.headline_stats(), stats_before);
    assert_eq!(controls.headline_stats().correlation, "-0.78");
}

#[test]
fn use_template_records_known_templates() {
    let mut controls = AnalysisControls::default();
    assert!(controls.use_template("Migration Analysis"));
    assert_eq!(controls.template, Some("Migration Analysis"));
    assert!(!controls.use_template("Tide Forecast"));
    assert_eq!(controls.template, Some("Migration Analysis"));
}

#[test]
fn empty_value_resets_optional_selector_to_placeholder() {
    let mut controls = AnalysisControls::default();
    assert!(controls.select(Selector::Region, "pacific"));
    assert!(controls.select(Selector::Region, ""));
    assert_eq!(controls.region, None);
    assert_eq!(controls.value(Selector::Region), None);

    assert!(controls.select(Selector::DataSource, "edna"));
    assert_eq!(controls.value(Selector::DataSource), Some("edna"));
    assert!(controls.select(Selector::DataSource, ""));
    assert_eq!(controls.data_source, None);
}

#[test]
fn axes_cannot_be_cleared() {
    let mut controls = AnalysisControls::default();
    assert!(!controls.select(Selector::XAxis, ""));
    assert!(!controls.clear(Selector::YAxis));
    assert_eq!(controls.value(Selector::XAxis), Some("temperature"));
    assert_eq!(controls.value(Selector::YAxis), Some("diversity"));
}

#[test]
fn default_region_and_window_are_real_choices() {
    let controls = AnalysisControls::default();
    for selector in [Selector::Region, Selector::TimeWindow] {
        let value = controls.value(selector).unwrap();
        assert!(selector.options().iter().any(|c| c.value == value));
    }
}
