use super::*;

#[test]
fn defaults_show_three_layers_for_global_2024() {
    let controls = VisualizationControls::default();
    assert_eq!(controls.year(), 2024);
    assert_eq!(controls.region, RegionId::Global);
    assert_eq!(controls.summary(), "Showing 3 active layers for global in 2024");
}

#[test]
fn toggle_flips_exactly_one_layer() {
    let mut layers = LayerSet::default();
    assert!(layers.toggle(LayerId::Salinity));
    assert_eq!(layers.len(), 4);
    assert!(layers.contains(LayerId::Temperature));
    assert!(!layers.toggle(LayerId::Salinity));
    assert_eq!(layers, LayerSet::default());
}

#[test]
fn toggling_off_removes_legend_entry() {
    let mut layers = LayerSet::default();
    assert_eq!(layers.legend(), vec!["Temperature (15-25°C)", "Ocean Currents", "Biodiversity Hotspots"]);
    layers.toggle(LayerId::Currents);
    assert_eq!(layers.legend(), vec!["Temperature (15-25°C)", "Biodiversity Hotspots"]);
}

#[test]
fn layers_without_legend_do_not_add_entries() {
    let mut layers = LayerSet(BTreeSet::new());
    layers.toggle(LayerId::Chlorophyll);
    assert!(layers.legend().is_empty());
    assert_eq!(layers.len(), 1);
}

#[test]
fn year_is_clamped_to_slider_range() {
    let mut controls = VisualizationControls::default();
    controls.set_year(1990);
    assert_eq!(controls.year(), YEAR_MIN);
    controls.set_year(2100);
    assert_eq!(controls.year(), YEAR_MAX);
    controls.set_year(2012);
    assert_eq!(controls.year(), 2012);
}

#[test]
fn year_input_ignores_garbage() {
    let mut controls = VisualizationControls::default();
    controls.set_year_input("2010");
    controls.set_year_input("soon");
    assert_eq!(controls.year(), 2010);
}

#[test]
fn summary_reflects_region_year_and_layers() {
    let mut controls = VisualizationControls::default();
    controls.select_region("arctic");
    controls.set_year(2015);
    controls.layers.toggle(LayerId::Temperature);
    assert_eq!(controls.summary(), "Showing 2 active layers for arctic in 2015");
}
