use super::*;

#[test]
fn tree_dot_follows_confidence_bands() {
    assert_eq!(tree_dot_class(100), "tree__dot tree__dot--high");
    assert_eq!(tree_dot_class(90), "tree__dot tree__dot--medium");
    assert_eq!(tree_dot_class(81), "tree__dot tree__dot--medium");
    assert_eq!(tree_dot_class(76), "tree__dot tree__dot--low");
}

#[test]
fn species_rank_is_the_least_confident_level() {
    let leaf = TAXONOMY_HIERARCHY.last().unwrap();
    assert_eq!(leaf.level, "Species");
    assert_eq!(tree_dot_class(leaf.confidence), "tree__dot tree__dot--low");
}
