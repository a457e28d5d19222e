//! Taxonomy and otolith morphology sample tables.

use serde::Serialize;

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod taxonomy_test;

/// One rank of the classification pathway with model confidence (percent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TaxonRank {
    pub level: &'static str,
    pub value: &'static str,
    pub confidence: u8,
}

pub static TAXONOMY_HIERARCHY: &[TaxonRank] = &[
    TaxonRank { level: "Kingdom", value: "Animalia", confidence: 100 },
    TaxonRank { level: "Phylum", value: "Chordata", confidence: 100 },
    TaxonRank { level: "Class", value: "Actinopterygii", confidence: 98 },
    TaxonRank { level: "Order", value: "Perciformes", confidence: 95 },
    TaxonRank { level: "Family", value: "Serranidae", confidence: 87 },
    TaxonRank { level: "Genus", value: "Epinephelus", confidence: 82 },
    TaxonRank { level: "Species", value: "E. marginatus", confidence: 76 },
];

pub const IDENTIFIED_SPECIES: &str = "Epinephelus marginatus";
pub const IDENTIFIED_COMMON_NAME: &str = "Dusky Grouper";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Verified,
    Pending,
}

impl ReviewStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub id: u32,
    pub species: &'static str,
    pub common_name: &'static str,
    pub confidence: u8,
    pub date: &'static str,
    pub location: &'static str,
    pub status: ReviewStatus,
}

pub static RECENT_CLASSIFICATIONS: &[Classification] = &[
    Classification {
        id: 1,
        species: "Epinephelus marginatus",
        common_name: "Dusky Grouper",
        confidence: 94,
        date: "2024-12-15",
        location: "Mediterranean Sea",
        status: ReviewStatus::Verified,
    },
    Classification {
        id: 2,
        species: "Thunnus thynnus",
        common_name: "Atlantic Bluefin Tuna",
        confidence: 88,
        date: "2024-12-14",
        location: "North Atlantic",
        status: ReviewStatus::Pending,
    },
    Classification {
        id: 3,
        species: "Pomacanthus imperator",
        common_name: "Emperor Angelfish",
        confidence: 91,
        date: "2024-12-13",
        location: "Indo-Pacific",
        status: ReviewStatus::Verified,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OtolithMeasurement {
    pub parameter: &'static str,
    pub value: &'static str,
    pub range: &'static str,
}

pub static OTOLITH_MEASUREMENTS: &[OtolithMeasurement] = &[
    OtolithMeasurement { parameter: "Length", value: "12.4 mm", range: "10.2-14.8 mm" },
    OtolithMeasurement { parameter: "Width", value: "8.7 mm", range: "7.1-10.3 mm" },
    OtolithMeasurement { parameter: "Perimeter", value: "34.2 mm", range: "29.8-38.6 mm" },
    OtolithMeasurement { parameter: "Area", value: "72.3 mm²", range: "58.1-86.5 mm²" },
    OtolithMeasurement { parameter: "Circularity", value: "0.847", range: "0.780-0.920" },
    OtolithMeasurement { parameter: "Aspect Ratio", value: "1.43", range: "1.25-1.65" },
];

/// Dimensionless shape indices shown under the measurements.
pub static SHAPE_INDICES: &[(&str, f64)] =
    &[("Form Factor", 0.723), ("Ellipticity", 0.856), ("Rectangularity", 0.634), ("Roundness", 0.789)];

/// Quick-navigation cards under the phylogenetic tree: (taxon, common name).
pub static RELATED_TAXA: &[(&str, &str)] = &[
    ("Actinopterygii", "Ray-finned fishes"),
    ("Chondrichthyes", "Cartilaginous fish"),
    ("Mollusca", "Mollusks"),
    ("Arthropoda", "Crustaceans"),
];
