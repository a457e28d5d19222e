use super::*;

#[test]
fn default_variant_is_default() {
    assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
}

#[test]
fn confidence_thresholds_are_strictly_greater_than() {
    assert_eq!(BadgeVariant::for_confidence(100), BadgeVariant::Default);
    assert_eq!(BadgeVariant::for_confidence(91), BadgeVariant::Default);
    assert_eq!(BadgeVariant::for_confidence(90), BadgeVariant::Secondary);
    assert_eq!(BadgeVariant::for_confidence(81), BadgeVariant::Secondary);
    assert_eq!(BadgeVariant::for_confidence(80), BadgeVariant::Outline);
    assert_eq!(BadgeVariant::for_confidence(0), BadgeVariant::Outline);
}

#[test]
fn classes_share_base_and_differ_by_modifier() {
    let variants = [BadgeVariant::Default, BadgeVariant::Secondary, BadgeVariant::Outline, BadgeVariant::Destructive];
    for v in variants {
        assert!(v.class().starts_with("badge badge--"));
    }
    assert_ne!(BadgeVariant::Outline.class(), BadgeVariant::Destructive.class());
}
