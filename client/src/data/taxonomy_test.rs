use super::*;

#[test]
fn hierarchy_runs_kingdom_to_species_with_non_increasing_confidence() {
    assert_eq!(TAXONOMY_HIERARCHY.first().map(|r| r.level), Some("Kingdom"));
    assert_eq!(TAXONOMY_HIERARCHY.last().map(|r| r.level), Some("Species"));
    assert!(TAXONOMY_HIERARCHY.windows(2).all(|w| w[1].confidence <= w[0].confidence));
}

#[test]
fn identified_species_matches_hierarchy_genus() {
    let genus = TAXONOMY_HIERARCHY.iter().find(|r| r.level == "Genus").map(|r| r.value);
    assert_eq!(genus, IDENTIFIED_SPECIES.split_whitespace().next());
}

#[test]
fn recent_classifications_include_one_pending_review() {
    let pending = RECENT_CLASSIFICATIONS.iter().filter(|c| c.status == ReviewStatus::Pending).count();
    assert_eq!(pending, 1);
}

#[test]
fn otolith_tables_are_complete() {
    assert_eq!(OTOLITH_MEASUREMENTS.len(), 6);
    assert_eq!(SHAPE_INDICES.len(), 4);
    assert!(SHAPE_INDICES.iter().all(|(_, v)| (0.0..=1.0).contains(v)));
}
