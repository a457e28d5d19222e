use super::*;

#[test]
fn recent_datasets_have_unique_ids_and_bounded_quality() {
    for (i, a) in RECENT_DATASETS.iter().enumerate() {
        assert!(a.quality <= 100);
        assert!(!a.tags.is_empty());
        for b in &RECENT_DATASETS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn only_the_deep_sea_images_are_still_processing() {
    let processing: Vec<_> = RECENT_DATASETS
        .iter()
        .filter(|d| d.status == DatasetStatus::Processing)
        .map(|d| d.name)
        .collect();
    assert_eq!(processing, vec!["Marine Species Images - Deep Sea"]);
}

#[test]
fn five_metadata_standards_are_offered() {
    assert_eq!(METADATA_STANDARDS.len(), 5);
    assert!(METADATA_STANDARDS[0].starts_with("OBIS"));
    assert!(METADATA_STANDARDS[4].starts_with("ICES"));
}
