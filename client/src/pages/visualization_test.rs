use super::*;

#[test]
fn threat_levels_map_to_badges() {
    assert_eq!(threat_variant(ThreatLevel::High), BadgeVariant::Destructive);
    assert_eq!(threat_variant(ThreatLevel::Medium), BadgeVariant::Secondary);
    assert_eq!(threat_variant(ThreatLevel::Low), BadgeVariant::Outline);
}

#[test]
fn timeline_labels_match_table_years() {
    let years: Vec<String> = TEMPERATURE_TIMELINE.iter().map(|p| p.year.to_string()).collect();
    assert_eq!(years, ["2020", "2021", "2022", "2023", "2024"]);
}
