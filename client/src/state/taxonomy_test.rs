use super::*;

#[test]
fn initial_state_is_preview_with_tree_hidden() {
    let state = TaxonomyState::default();
    assert_eq!(state.tab, TaxonomyTab::Classification);
    assert!(!state.analysis_complete);
    assert!(!state.show_tree);
    assert_eq!(state.tree_variant(), TreeVariant::Preview);
    assert_eq!(state.tree_button_label(), "Preview Taxonomic Tree");
}

#[test]
fn identify_switches_to_full_tree_copy() {
    let mut state = TaxonomyState::default();
    state.identify();
    assert_eq!(state.tree_variant(), TreeVariant::Full);
    assert_eq!(state.tree_variant().title(), "Taxonomic Hierarchy");
    assert_eq!(state.tree_variant().description(), "Complete phylogenetic classification pathway");
    assert_eq!(state.tree_button_label(), "View Taxonomic Tree");
}

#[test]
fn identify_is_idempotent_and_keeps_tree_visibility() {
    let mut state = TaxonomyState::default();
    state.reveal_tree();
    state.identify();
    state.identify();
    assert!(state.analysis_complete);
    assert!(state.show_tree);
}

#[test]
fn toggle_tree_flips_and_reveal_only_opens() {
    let mut state = TaxonomyState::default();
    state.toggle_tree();
    assert!(state.show_tree);
    assert_eq!(state.tree_button_label(), "Hide Taxonomic Tree");
    state.reveal_tree();
    assert!(state.show_tree);
    state.toggle_tree();
    assert!(!state.show_tree);
}

#[test]
fn preview_copy_differs_from_full() {
    assert_eq!(TreeVariant::Preview.title(), "Taxonomic Hierarchy Preview");
    assert_eq!(TreeVariant::Preview.description(), "Phylogenetic classification pathway");
    assert_ne!(TreeVariant::Preview.title(), TreeVariant::Full.title());
}

#[test]
fn classification_filter_is_stored_but_validated() {
    let mut state = TaxonomyState::default();
    state.set_classification_filter("genus");
    assert_eq!(state.classification_filter, Some("genus"));
    state.set_classification_filter("order");
    assert_eq!(state.classification_filter, None);
}

#[test]
fn otolith_view_parses_select_values() {
    assert_eq!(OtolithView::from_value("3d"), OtolithView::ThreeD);
    assert_eq!(OtolithView::from_value("2d"), OtolithView::TwoD);
    assert_eq!(OtolithView::from_value("4d"), OtolithView::TwoD);
    assert_eq!(OtolithView::ThreeD.value(), "3d");
}
