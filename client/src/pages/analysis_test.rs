use super::*;

#[test]
fn impact_maps_to_badge_variant() {
    assert_eq!(impact_variant(Impact::High), BadgeVariant::Destructive);
    assert_eq!(impact_variant(Impact::Medium), BadgeVariant::Secondary);
    assert_eq!(impact_variant(Impact::Low), BadgeVariant::Outline);
}

#[test]
fn every_insight_gets_a_confidence_badge_tier() {
    let tiers: Vec<_> = AI_INSIGHTS.iter().map(|i| BadgeVariant::for_confidence(i.confidence)).collect();
    assert_eq!(
        tiers,
        vec![BadgeVariant::Secondary, BadgeVariant::Default, BadgeVariant::Secondary, BadgeVariant::Default]
    );
}

#[test]
fn trend_charts_sample_the_head_of_the_series() {
    let series = AnalysisControls::default().correlation_series();
    let trend = &series[..TREND_SAMPLE_LEN.min(series.len())];
    assert_eq!(trend.len(), 5);
    assert_eq!(trend[0].zone, "High diversity zone");
}
