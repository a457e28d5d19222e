use super::*;

#[test]
fn default_layers_are_temperature_currents_biodiversity() {
    let on: Vec<_> = LayerId::ALL.into_iter().filter(|l| l.enabled_by_default()).collect();
    assert_eq!(on, vec![LayerId::Temperature, LayerId::Currents, LayerId::Biodiversity]);
}

#[test]
fn layer_ids_round_trip_and_reject_unknown() {
    for layer in LayerId::ALL {
        assert_eq!(layer.id().parse::<LayerId>(), Ok(layer));
    }
    assert!("bathymetry".parse::<LayerId>().is_err());
}

#[test]
fn only_three_layers_have_legend_entries() {
    let with_legend = LayerId::ALL.into_iter().filter(|l| l.legend().is_some()).count();
    assert_eq!(with_legend, 3);
    assert_eq!(LayerId::Salinity.legend(), None);
}

#[test]
fn timeline_covers_2020_through_2024_and_warms() {
    let years: Vec<_> = TEMPERATURE_TIMELINE.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024]);
    assert!(TEMPERATURE_TIMELINE.windows(2).all(|w| w[1].value > w[0].value));
}

#[test]
fn hotspots_carry_threat_levels() {
    assert_eq!(SPECIES_HOTSPOTS.len(), 5);
    assert_eq!(SPECIES_HOTSPOTS[0].threat, ThreatLevel::High);
    assert_eq!(SPECIES_HOTSPOTS[4].threat.label(), "low");
}
