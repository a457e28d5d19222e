use super::*;

#[test]
fn region_ids_round_trip() {
    for region in RegionId::ALL {
        assert_eq!(region.id().parse::<RegionId>(), Ok(region));
    }
}

#[test]
fn unknown_region_is_an_error_and_parse_or_global_falls_back() {
    assert_eq!("mediterranean".parse::<RegionId>(), Err(UnknownRegion("mediterranean".to_owned())));
    assert_eq!(RegionId::parse_or_global("mediterranean"), RegionId::Global);
    assert_eq!(RegionId::parse_or_global("arctic"), RegionId::Arctic);
}

#[test]
fn global_headline_metrics_match_dashboard_copy() {
    let global = RegionId::Global.data();
    assert_eq!(global.name, "Global Ocean");
    assert_eq!(global.temperature, 19.8);
    assert_eq!(global.temp_trend, 0.3);
    assert_eq!(global.species, 1450);
    assert_eq!(global.species_trend, 23);
    assert_eq!(global.current_direction, "NE");
    assert_eq!(global.ecosystem_health, 87);
}

#[test]
fn arctic_species_trend_is_negative() {
    assert_eq!(RegionId::Arctic.data().species_trend, -5);
}

#[test]
fn every_region_has_full_day_of_readings_and_panels() {
    for region in RegionId::ALL {
        let data = region.data();
        assert_eq!(data.readings.len(), 12, "{}", region.id());
        assert_eq!(data.readings[0].time, "00:00");
        assert_eq!(data.readings[11].time, "22:00");
        assert_eq!(data.biodiversity.len(), 6);
        assert_eq!(data.alerts.len(), 2);
        assert_eq!(data.chemistry.len(), 6);
        assert!(data.ecosystem_health <= 100);
    }
}

#[test]
fn regions_have_distinct_names() {
    for (i, a) in RegionId::ALL.iter().enumerate() {
        for b in &RegionId::ALL[i + 1..] {
            assert_ne!(a.data().name, b.data().name);
        }
    }
}

#[test]
fn shared_tables_are_populated() {
    assert_eq!(DEPTH_PROFILE.len(), 7);
    assert_eq!(DEPTH_PROFILE[0].depth, "0m");
    assert_eq!(ECOSYSTEM_HEALTH.len(), 6);
    assert!(ECOSYSTEM_HEALTH.iter().all(|h| h.score <= 100));
}

#[test]
fn region_serializes_with_lowercase_enums() {
    let json = serde_json::to_value(RegionId::Pacific.data().alerts[1]).unwrap();
    assert_eq!(json["kind"], "warning");
    assert_eq!(json["priority"], "high");
}
