use super::*;

#[test]
fn defaults_select_coi_and_two_targets() {
    let state = EdnaState::default();
    assert_eq!(state.tab, EdnaTab::Sequences);
    assert_eq!(state.gene, GeneMarker::Coi);
    assert_eq!(state.target_genes.len(), 2);
    assert!(state.target_genes.contains(&GeneMarker::Coi));
    assert!(state.target_genes.contains(&GeneMarker::Rrna16S));
    assert_eq!(state.databases.iter().copied().collect::<Vec<_>>(), vec!["BOLD Systems", "GenBank"]);
}

#[test]
fn set_gene_accepts_known_markers_only() {
    let mut state = EdnaState::default();
    state.set_gene("ITS");
    assert_eq!(state.gene, GeneMarker::Its);
    state.set_gene("28S");
    assert_eq!(state.gene, GeneMarker::Its);
}

#[test]
fn target_gene_toggle_round_trips() {
    let mut state = EdnaState::default();
    assert!(state.toggle_target_gene(GeneMarker::Rrna12S));
    assert!(!state.toggle_target_gene(GeneMarker::Coi));
    assert_eq!(state.target_genes.iter().copied().collect::<Vec<_>>(), vec![GeneMarker::Rrna16S, GeneMarker::Rrna12S]);
}

#[test]
fn database_toggle_round_trips() {
    let mut state = EdnaState::default();
    assert!(!state.toggle_database("GenBank"));
    assert!(state.toggle_database("GenBank"));
    assert_eq!(state, EdnaState::default());
}

#[test]
fn four_tabs_with_distinct_ids() {
    let ids: Vec<_> = EdnaTab::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["sequences", "analysis", "detection", "references"]);
}

#[test]
fn analysis_button_label_follows_task() {
    assert_eq!(analysis_button_label(false), "Start Analysis");
    assert_eq!(analysis_button_label(true), "Analyzing...");
}

#[test]
fn search_button_label_follows_task() {
    assert_eq!(search_button_label(false), "Search Databases");
    assert_eq!(search_button_label(true), "Searching...");
}
