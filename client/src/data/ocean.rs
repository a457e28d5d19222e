//! Ocean region sample data for the dashboard and visualization modules.

use std::str::FromStr;

use serde::Serialize;

#[cfg(test)]
#[path = "ocean_test.rs"]
mod ocean_test;

/// Error returned when a region id string does not name a known region.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown ocean region: {0}")]
pub struct UnknownRegion(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionId {
    #[default]
    Global,
    Pacific,
    Atlantic,
    Indian,
    Arctic,
    Southern,
}

impl RegionId {
    pub const ALL: [RegionId; 6] = [
        RegionId::Global,
        RegionId::Pacific,
        RegionId::Atlantic,
        RegionId::Indian,
        RegionId::Arctic,
        RegionId::Southern,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Pacific => "pacific",
            Self::Atlantic => "atlantic",
            Self::Indian => "indian",
            Self::Arctic => "arctic",
            Self::Southern => "southern",
        }
    }

    #[must_use]
    pub fn data(self) -> &'static OceanRegion {
        match self {
            Self::Global => &GLOBAL,
            Self::Pacific => &PACIFIC,
            Self::Atlantic => &ATLANTIC,
            Self::Indian => &INDIAN,
            Self::Arctic => &ARCTIC,
            Self::Southern => &SOUTHERN,
        }
    }

    /// Parse a picker value, falling back to the global aggregate.
    #[must_use]
    pub fn parse_or_global(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err| {
            log::warn!("{err}; showing global ocean");
            Self::Global
        })
    }
}

impl FromStr for RegionId {
    type Err = UnknownRegion;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.id() == raw)
            .ok_or_else(|| UnknownRegion(raw.to_owned()))
    }
}

/// One two-hourly surface reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Reading {
    pub time: &'static str,
    pub temp: f64,
    pub salinity: f64,
    pub depth: f64,
    pub oxygen: f64,
}

/// Share of observed specimens for one taxonomic group.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpeciesShare {
    pub group: &'static str,
    pub count: u32,
    pub percentage: f64,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegionAlert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStatus {
    Normal,
    Elevated,
    Low,
}

impl ParameterStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::Low => "low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChemicalParameter {
    pub parameter: &'static str,
    pub value: f64,
    pub status: ParameterStatus,
    pub unit: &'static str,
    pub optimal: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OceanRegion {
    pub name: &'static str,
    pub description: &'static str,
    pub temperature: f64,
    pub temp_trend: f64,
    pub species: u32,
    pub species_trend: i32,
    pub current_velocity: f64,
    pub current_direction: &'static str,
    pub ecosystem_health: u8,
    pub readings: &'static [Reading],
    pub biodiversity: &'static [SpeciesShare],
    pub alerts: &'static [RegionAlert],
    pub chemistry: &'static [ChemicalParameter],
}

/// Current and pressure at one depth band (shared across regions).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DepthProfile {
    pub depth: &'static str,
    pub velocity: f64,
    pub direction: &'static str,
    pub temperature: f64,
    pub pressure: u32,
}

/// One axis of the ecosystem health radar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HealthIndicator {
    pub metric: &'static str,
    pub score: u8,
}

pub const CHART_1: &str = "#0ea5e9";
pub const CHART_2: &str = "#14b8a6";
pub const CHART_3: &str = "#f59e0b";
pub const CHART_4: &str = "#8b5cf6";
pub const CHART_5: &str = "#64748b";
pub const CHART_DEEP: &str = "#0c4a6e";

const fn r(time: &'static str, temp: f64, salinity: f64, oxygen: f64) -> Reading {
    Reading { time, temp, salinity, depth: 10.0, oxygen }
}

const fn share(group: &'static str, count: u32, percentage: f64, color: &'static str) -> SpeciesShare {
    SpeciesShare { group, count, percentage, color }
}

const fn chem(parameter: &'static str, value: f64, status: ParameterStatus, unit: &'static str, optimal: f64) -> ChemicalParameter {
    ChemicalParameter { parameter, value, status, unit, optimal }
}

const fn alert(kind: AlertKind, title: &'static str, description: &'static str, priority: Priority) -> RegionAlert {
    RegionAlert { kind, title, description, priority }
}

use AlertKind::{Info, Warning};
use ParameterStatus::{Elevated, Low, Normal};

pub static GLOBAL: OceanRegion = OceanRegion {
    name: "Global Ocean",
    description: "Worldwide marine data aggregation",
    temperature: 19.8,
    temp_trend: 0.3,
    species: 1450,
    species_trend: 23,
    current_velocity: 0.8,
    current_direction: "NE",
    ecosystem_health: 87,
    readings: &[
        r("00:00", 18.2, 34.5, 7.8),
        r("02:00", 18.0, 34.6, 7.9),
        r("04:00", 17.8, 34.7, 8.0),
        r("06:00", 18.5, 34.4, 7.7),
        r("08:00", 19.1, 34.3, 7.5),
        r("10:00", 19.8, 34.2, 7.3),
        r("12:00", 20.5, 34.1, 7.1),
        r("14:00", 21.0, 34.0, 7.0),
        r("16:00", 21.2, 33.9, 6.9),
        r("18:00", 20.8, 34.0, 7.0),
        r("20:00", 19.8, 34.2, 7.2),
        r("22:00", 19.2, 34.3, 7.4),
    ],
    biodiversity: &[
        share("Fish", 847, 57.4, CHART_1),
        share("Mollusks", 234, 15.9, CHART_2),
        share("Crustaceans", 156, 10.6, CHART_3),
        share("Cnidarians", 89, 6.0, CHART_4),
        share("Others", 124, 8.4, CHART_5),
        share("Echinoderms", 67, 4.5, CHART_DEEP),
    ],
    alerts: &[
        alert(Warning, "Chlorophyll Elevation", "Possible algal bloom detected in monitoring zone 3A", Priority::Medium),
        alert(Info, "Current Anomaly", "Increased current activity in deep water channels", Priority::Low),
    ],
    chemistry: &[
        chem("pH", 8.1, Normal, "", 8.0),
        chem("Dissolved O2", 7.2, Normal, "mg/L", 7.5),
        chem("Chlorophyll-a", 2.8, Elevated, "μg/L", 1.5),
        chem("Nitrates", 15.3, Normal, "μmol/L", 12.0),
        chem("Phosphates", 1.2, Low, "μmol/L", 2.0),
        chem("Turbidity", 0.8, Normal, "NTU", 1.0),
    ],
};

pub static PACIFIC: OceanRegion = OceanRegion {
    name: "Pacific Ocean",
    description: "Largest ocean basin data",
    temperature: 22.1,
    temp_trend: 0.5,
    species: 2150,
    species_trend: 45,
    current_velocity: 1.2,
    current_direction: "W",
    ecosystem_health: 89,
    readings: &[
        r("00:00", 21.5, 35.2, 8.1),
        r("02:00", 21.3, 35.3, 8.2),
        r("04:00", 21.1, 35.4, 8.3),
        r("06:00", 21.8, 35.1, 8.0),
        r("08:00", 22.4, 35.0, 7.8),
        r("10:00", 23.1, 34.9, 7.6),
        r("12:00", 23.8, 34.8, 7.4),
        r("14:00", 24.3, 34.7, 7.3),
        r("16:00", 24.5, 34.6, 7.2),
        r("18:00", 24.1, 34.7, 7.3),
        r("20:00", 23.1, 34.9, 7.5),
        r("22:00", 22.5, 35.0, 7.7),
    ],
    biodiversity: &[
        share("Fish", 1245, 58.8, CHART_1),
        share("Mollusks", 412, 19.4, CHART_2),
        share("Cnidarians", 234, 11.0, CHART_4),
        share("Crustaceans", 189, 8.9, CHART_3),
        share("Echinoderms", 145, 6.8, CHART_DEEP),
        share("Others", 98, 4.6, CHART_5),
    ],
    alerts: &[
        alert(Info, "Coral Bleaching Monitor", "Temperature increase monitoring active in Great Barrier Reef region", Priority::Medium),
        alert(Warning, "Tsunami Warning System", "Seismic activity detected - monitoring for potential tsunami risk", Priority::High),
    ],
    chemistry: &[
        chem("pH", 8.2, Normal, "", 8.1),
        chem("Dissolved O2", 7.8, Normal, "mg/L", 7.5),
        chem("Chlorophyll-a", 1.9, Normal, "μg/L", 1.5),
        chem("Nitrates", 18.7, Normal, "μmol/L", 15.0),
        chem("Phosphates", 2.1, Normal, "μmol/L", 2.0),
        chem("Turbidity", 0.6, Normal, "NTU", 1.0),
    ],
};

pub static ATLANTIC: OceanRegion = OceanRegion {
    name: "Atlantic Ocean",
    description: "Atlantic basin monitoring",
    temperature: 18.4,
    temp_trend: 0.1,
    species: 1290,
    species_trend: 18,
    current_velocity: 0.9,
    current_direction: "NE",
    ecosystem_health: 85,
    readings: &[
        r("00:00", 17.8, 36.1, 7.9),
        r("02:00", 17.6, 36.2, 8.0),
        r("04:00", 17.4, 36.3, 8.1),
        r("06:00", 18.1, 36.0, 7.8),
        r("08:00", 18.7, 35.9, 7.6),
        r("10:00", 19.4, 35.8, 7.4),
        r("12:00", 20.1, 35.7, 7.2),
        r("14:00", 20.6, 35.6, 7.1),
        r("16:00", 20.8, 35.5, 7.0),
        r("18:00", 20.4, 35.6, 7.1),
        r("20:00", 19.4, 35.8, 7.3),
        r("22:00", 18.8, 35.9, 7.5),
    ],
    biodiversity: &[
        share("Fish", 723, 56.1, CHART_1),
        share("Mollusks", 287, 22.3, CHART_2),
        share("Crustaceans", 156, 12.1, CHART_3),
        share("Cnidarians", 89, 6.9, CHART_4),
        share("Echinoderms", 67, 5.2, CHART_DEEP),
        share("Others", 98, 7.6, CHART_5),
    ],
    alerts: &[
        alert(Info, "Gulf Stream Analysis", "Strong Gulf Stream current detected - excellent for marine transport", Priority::Low),
        alert(Warning, "Sargassum Bloom", "Large sargassum mat detected in Caribbean waters", Priority::Medium),
    ],
    chemistry: &[
        chem("pH", 8.0, Normal, "", 8.0),
        chem("Dissolved O2", 7.6, Normal, "mg/L", 7.5),
        chem("Chlorophyll-a", 2.1, Normal, "μg/L", 1.5),
        chem("Nitrates", 14.2, Normal, "μmol/L", 12.0),
        chem("Phosphates", 1.8, Normal, "μmol/L", 2.0),
        chem("Turbidity", 1.2, Normal, "NTU", 1.0),
    ],
};

pub static INDIAN: OceanRegion = OceanRegion {
    name: "Indian Ocean",
    description: "Indian Ocean region data",
    temperature: 24.2,
    temp_trend: 0.7,
    species: 1890,
    species_trend: 35,
    current_velocity: 0.7,
    current_direction: "SW",
    ecosystem_health: 82,
    readings: &[
        r("00:00", 23.5, 34.8, 7.5),
        r("02:00", 23.3, 34.9, 7.6),
        r("04:00", 23.1, 35.0, 7.7),
        r("06:00", 23.8, 34.7, 7.4),
        r("08:00", 24.4, 34.6, 7.2),
        r("10:00", 25.1, 34.5, 7.0),
        r("12:00", 25.8, 34.4, 6.8),
        r("14:00", 26.3, 34.3, 6.7),
        r("16:00", 26.5, 34.2, 6.6),
        r("18:00", 26.1, 34.3, 6.7),
        r("20:00", 25.1, 34.5, 6.9),
        r("22:00", 24.5, 34.6, 7.1),
    ],
    biodiversity: &[
        share("Fish", 1134, 60.0, CHART_1),
        share("Cnidarians", 378, 20.0, CHART_4),
        share("Mollusks", 189, 10.0, CHART_2),
        share("Crustaceans", 113, 6.0, CHART_3),
        share("Echinoderms", 76, 4.0, CHART_DEEP),
        share("Others", 76, 4.0, CHART_5),
    ],
    alerts: &[
        alert(Warning, "Monsoon Impact", "Monsoon season affecting water temperature and salinity levels", Priority::Medium),
        alert(Info, "Coral Triangle Monitoring", "High biodiversity zone under active conservation monitoring", Priority::Low),
    ],
    chemistry: &[
        chem("pH", 8.3, Elevated, "", 8.1),
        chem("Dissolved O2", 6.8, Low, "mg/L", 7.5),
        chem("Chlorophyll-a", 3.2, Elevated, "μg/L", 1.5),
        chem("Nitrates", 21.4, Elevated, "μmol/L", 15.0),
        chem("Phosphates", 2.8, Elevated, "μmol/L", 2.0),
        chem("Turbidity", 1.8, Elevated, "NTU", 1.0),
    ],
};

pub static ARCTIC: OceanRegion = OceanRegion {
    name: "Arctic Ocean",
    description: "Arctic marine ecosystem",
    temperature: 1.2,
    temp_trend: 0.8,
    species: 420,
    species_trend: -5,
    current_velocity: 0.3,
    current_direction: "E",
    ecosystem_health: 78,
    readings: &[
        r("00:00", 0.8, 32.1, 9.2),
        r("02:00", 0.6, 32.2, 9.3),
        r("04:00", 0.4, 32.3, 9.4),
        r("06:00", 0.9, 32.0, 9.1),
        r("08:00", 1.4, 31.9, 8.9),
        r("10:00", 2.1, 31.8, 8.7),
        r("12:00", 2.8, 31.7, 8.5),
        r("14:00", 3.2, 31.6, 8.4),
        r("16:00", 3.4, 31.5, 8.3),
        r("18:00", 3.0, 31.6, 8.4),
        r("20:00", 2.1, 31.8, 8.6),
        r("22:00", 1.5, 31.9, 8.8),
    ],
    biodiversity: &[
        share("Fish", 189, 45.0, CHART_1),
        share("Crustaceans", 126, 30.0, CHART_3),
        share("Mollusks", 63, 15.0, CHART_2),
        share("Marine Mammals", 25, 6.0, CHART_4),
        share("Seabirds", 17, 4.0, CHART_DEEP),
        share("Others", 21, 5.0, CHART_5),
    ],
    alerts: &[
        alert(Warning, "Ice Melt Acceleration", "Rapid sea ice loss detected - monitoring ecosystem impact", Priority::High),
        alert(Info, "Polar Bear Tracking", "Active monitoring of polar bear populations and migration patterns", Priority::Medium),
    ],
    chemistry: &[
        chem("pH", 7.9, Low, "", 8.1),
        chem("Dissolved O2", 9.1, Elevated, "mg/L", 7.5),
        chem("Chlorophyll-a", 0.8, Low, "μg/L", 1.5),
        chem("Nitrates", 8.4, Low, "μmol/L", 12.0),
        chem("Phosphates", 0.9, Low, "μmol/L", 2.0),
        chem("Turbidity", 0.3, Normal, "NTU", 1.0),
    ],
};

pub static SOUTHERN: OceanRegion = OceanRegion {
    name: "Southern Ocean",
    description: "Antarctic waters data",
    temperature: 3.8,
    temp_trend: 0.4,
    species: 890,
    species_trend: 12,
    current_velocity: 1.5,
    current_direction: "E",
    ecosystem_health: 91,
    readings: &[
        r("00:00", 3.2, 34.2, 8.8),
        r("02:00", 3.0, 34.3, 8.9),
        r("04:00", 2.8, 34.4, 9.0),
        r("06:00", 3.5, 34.1, 8.7),
        r("08:00", 4.1, 34.0, 8.5),
        r("10:00", 4.8, 33.9, 8.3),
        r("12:00", 5.5, 33.8, 8.1),
        r("14:00", 6.0, 33.7, 8.0),
        r("16:00", 6.2, 33.6, 7.9),
        r("18:00", 5.8, 33.7, 8.0),
        r("20:00", 4.8, 33.9, 8.2),
        r("22:00", 4.2, 34.0, 8.4),
    ],
    biodiversity: &[
        share("Krill", 356, 40.0, CHART_3),
        share("Fish", 267, 30.0, CHART_1),
        share("Marine Mammals", 89, 10.0, CHART_4),
        share("Seabirds", 71, 8.0, CHART_DEEP),
        share("Cephalopods", 53, 6.0, CHART_2),
        share("Others", 54, 6.0, CHART_5),
    ],
    alerts: &[
        alert(Info, "Penguin Colony Monitoring", "Emperor penguin breeding season - increased wildlife activity", Priority::Low),
        alert(Warning, "Krill Population Shift", "Unusual krill migration patterns detected - investigating climate impact", Priority::Medium),
    ],
    chemistry: &[
        chem("pH", 8.0, Normal, "", 8.1),
        chem("Dissolved O2", 8.5, Elevated, "mg/L", 7.5),
        chem("Chlorophyll-a", 1.2, Normal, "μg/L", 1.5),
        chem("Nitrates", 28.6, Elevated, "μmol/L", 20.0),
        chem("Phosphates", 3.1, Elevated, "μmol/L", 2.0),
        chem("Turbidity", 0.4, Normal, "NTU", 1.0),
    ],
};

pub static DEPTH_PROFILE: &[DepthProfile] = &[
    DepthProfile { depth: "0m", velocity: 0.8, direction: "NE", temperature: 21.2, pressure: 1013 },
    DepthProfile { depth: "10m", velocity: 1.2, direction: "NE", temperature: 20.5, pressure: 1014 },
    DepthProfile { depth: "25m", velocity: 0.9, direction: "E", temperature: 19.8, pressure: 1016 },
    DepthProfile { depth: "50m", velocity: 0.6, direction: "SE", temperature: 18.9, pressure: 1018 },
    DepthProfile { depth: "75m", velocity: 0.4, direction: "S", temperature: 17.8, pressure: 1020 },
    DepthProfile { depth: "100m", velocity: 0.3, direction: "S", temperature: 16.5, pressure: 1022 },
    DepthProfile { depth: "150m", velocity: 0.2, direction: "SW", temperature: 15.2, pressure: 1025 },
];

pub static ECOSYSTEM_HEALTH: &[HealthIndicator] = &[
    HealthIndicator { metric: "Biodiversity", score: 87 },
    HealthIndicator { metric: "Water Quality", score: 92 },
    HealthIndicator { metric: "Fish Population", score: 78 },
    HealthIndicator { metric: "Coral Health", score: 85 },
    HealthIndicator { metric: "Oxygen Levels", score: 94 },
    HealthIndicator { metric: "pH Balance", score: 89 },
];
