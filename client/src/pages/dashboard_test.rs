use super::*;

#[test]
fn chemistry_status_maps_to_badge_variant() {
    assert_eq!(status_variant(ParameterStatus::Normal), BadgeVariant::Secondary);
    assert_eq!(status_variant(ParameterStatus::Elevated), BadgeVariant::Destructive);
    assert_eq!(status_variant(ParameterStatus::Low), BadgeVariant::Outline);
}

#[test]
fn alerts_are_styled_by_kind() {
    assert_eq!(alert_class(AlertKind::Warning), "alert alert--warning");
    assert_eq!(alert_class(AlertKind::Info), "alert alert--info");
}

#[test]
fn zero_trend_reads_as_down() {
    assert_eq!(trend_class(0.3), "trend--up");
    assert_eq!(trend_class(0.0), "trend--down");
    assert_eq!(trend_class(-0.8), "trend--down");
}
