//! Map layers, temperature timeline and biodiversity hotspots.

use std::str::FromStr;

use serde::Serialize;

#[cfg(test)]
#[path = "visualization_test.rs"]
mod visualization_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerId {
    Temperature,
    Salinity,
    Currents,
    Biodiversity,
    Chlorophyll,
}

impl LayerId {
    /// Switch order in the controls panel.
    pub const ALL: [LayerId; 5] =
        [LayerId::Temperature, LayerId::Salinity, LayerId::Currents, LayerId::Biodiversity, LayerId::Chlorophyll];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Salinity => "salinity",
            Self::Currents => "currents",
            Self::Biodiversity => "biodiversity",
            Self::Chlorophyll => "chlorophyll",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Temperature => "Sea Surface Temperature",
            Self::Salinity => "Salinity Levels",
            Self::Currents => "Ocean Currents",
            Self::Biodiversity => "Biodiversity Hotspots",
            Self::Chlorophyll => "Chlorophyll Concentration",
        }
    }

    /// Whether the layer is switched on when the view mounts.
    #[must_use]
    pub fn enabled_by_default(self) -> bool {
        matches!(self, Self::Temperature | Self::Currents | Self::Biodiversity)
    }

    /// Map legend entry, for the layers that have one.
    #[must_use]
    pub fn legend(self) -> Option<&'static str> {
        match self {
            Self::Temperature => Some("Temperature (15-25°C)"),
            Self::Currents => Some("Ocean Currents"),
            Self::Biodiversity => Some("Biodiversity Hotspots"),
            Self::Salinity | Self::Chlorophyll => None,
        }
    }
}

impl FromStr for LayerId {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.id() == raw)
            .ok_or_else(|| format!("unknown map layer: {raw}"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct YearValue {
    pub year: u16,
    pub value: f64,
}

pub static TEMPERATURE_TIMELINE: &[YearValue] = &[
    YearValue { year: 2020, value: 18.2 },
    YearValue { year: 2021, value: 18.8 },
    YearValue { year: 2022, value: 19.1 },
    YearValue { year: 2023, value: 19.6 },
    YearValue { year: 2024, value: 20.2 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hotspot {
    pub name: &'static str,
    pub species: u32,
    pub lat: f64,
    pub lon: f64,
    pub threat: ThreatLevel,
}

pub static SPECIES_HOTSPOTS: &[Hotspot] = &[
    Hotspot { name: "Coral Triangle", species: 3420, lat: -5.0, lon: 120.0, threat: ThreatLevel::High },
    Hotspot { name: "Caribbean Sea", species: 2100, lat: 15.0, lon: -75.0, threat: ThreatLevel::Medium },
    Hotspot { name: "Great Barrier Reef", species: 2890, lat: -18.0, lon: 147.0, threat: ThreatLevel::High },
    Hotspot { name: "Mediterranean", species: 1650, lat: 35.0, lon: 18.0, threat: ThreatLevel::Medium },
    Hotspot { name: "North Atlantic", species: 1890, lat: 45.0, lon: -30.0, threat: ThreatLevel::Low },
];
