//! Cross-disciplinary analysis tables: correlation samples, insights,
//! templates, model metrics and the selector option lists.

use serde::Serialize;

use super::{Choice, choice};

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CorrelationPoint {
    pub temperature: f64,
    pub diversity: f64,
    pub salinity: f64,
    pub zone: &'static str,
}

pub static CORRELATION_DATA: &[CorrelationPoint] = &[
    CorrelationPoint { temperature: 18.2, diversity: 45.0, salinity: 34.5, zone: "High diversity zone" },
    CorrelationPoint { temperature: 19.1, diversity: 52.0, salinity: 34.3, zone: "Coral reef area" },
    CorrelationPoint { temperature: 20.5, diversity: 38.0, salinity: 33.9, zone: "Coastal waters" },
    CorrelationPoint { temperature: 17.8, diversity: 42.0, salinity: 34.7, zone: "Deep water" },
    CorrelationPoint { temperature: 21.2, diversity: 28.0, salinity: 33.8, zone: "Warm currents" },
    CorrelationPoint { temperature: 16.9, diversity: 48.0, salinity: 35.1, zone: "Cold currents" },
    CorrelationPoint { temperature: 22.1, diversity: 25.0, salinity: 33.5, zone: "Tropical zone" },
    CorrelationPoint { temperature: 15.8, diversity: 51.0, salinity: 35.3, zone: "Polar zone" },
];

/// Rows used by the temporal-trend and regional-comparison charts.
pub const TREND_SAMPLE_LEN: usize = 5;

/// Headline statistics printed under the scatter plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeadlineStats {
    pub correlation: &'static str,
    pub r_squared: &'static str,
    pub significance: &'static str,
}

pub const HEADLINE_STATS: HeadlineStats =
    HeadlineStats { correlation: "-0.78", r_squared: "0.61", significance: "p < 0.001" };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub id: u32,
    pub title: &'static str,
    pub insight: &'static str,
    pub confidence: u8,
    pub kind: &'static str,
    pub impact: Impact,
}

pub static AI_INSIGHTS: &[Insight] = &[
    Insight {
        id: 1,
        title: "Temperature-Diversity Correlation",
        insight: "Strong negative correlation (-0.78) between water temperature and species diversity. Cooler waters (15-18°C) show highest biodiversity.",
        confidence: 89,
        kind: "correlation",
        impact: Impact::High,
    },
    Insight {
        id: 2,
        title: "Seasonal Migration Patterns",
        insight: "eDNA analysis reveals 23% increase in tuna species presence during spring months, indicating seasonal migration corridors.",
        confidence: 94,
        kind: "temporal",
        impact: Impact::Medium,
    },
    Insight {
        id: 3,
        title: "Pollution Impact on Otolith Morphology",
        insight: "Fish from polluted areas show 15% deviation in otolith circularity indices compared to pristine environments.",
        confidence: 82,
        kind: "environmental",
        impact: Impact::High,
    },
    Insight {
        id: 4,
        title: "Chlorophyll-Fish Abundance Relationship",
        insight: "Peak fish abundance occurs 2-3 weeks after chlorophyll blooms, suggesting phytoplankton-driven food web dynamics.",
        confidence: 91,
        kind: "ecological",
        impact: Impact::Medium,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisTemplate {
    pub name: &'static str,
    pub variables: &'static [&'static str],
}

pub static ANALYSIS_TEMPLATES: &[AnalysisTemplate] = &[
    AnalysisTemplate { name: "Climate Change Impact", variables: &["Temperature", "Species Count", "Time"] },
    AnalysisTemplate { name: "Pollution Assessment", variables: &["Chemical Levels", "Biodiversity", "Health Index"] },
    AnalysisTemplate { name: "Migration Analysis", variables: &["eDNA", "Location", "Season"] },
    AnalysisTemplate { name: "Ecosystem Health", variables: &["Multiple Parameters", "Biodiversity", "Stability"] },
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ModelMetrics {
    pub model: &'static str,
    pub accuracy: u8,
    pub f1_score: f64,
    pub samples: u32,
}

pub static MODEL_PERFORMANCE: &[ModelMetrics] = &[
    ModelMetrics { model: "Species Prediction", accuracy: 94, f1_score: 0.92, samples: 1247 },
    ModelMetrics { model: "Temperature Correlation", accuracy: 87, f1_score: 0.85, samples: 892 },
    ModelMetrics { model: "Biodiversity Index", accuracy: 91, f1_score: 0.89, samples: 1543 },
    ModelMetrics { model: "Pollution Impact", accuracy: 83, f1_score: 0.81, samples: 634 },
];

pub static X_AXIS_OPTIONS: &[Choice] = &[
    choice("temperature", "Temperature (°C)"),
    choice("salinity", "Salinity (PSU)"),
    choice("depth", "Depth (m)"),
    choice("chlorophyll", "Chlorophyll (mg/m³)"),
];

pub static Y_AXIS_OPTIONS: &[Choice] = &[
    choice("diversity", "Species Diversity"),
    choice("abundance", "Fish Abundance"),
    choice("biomass", "Total Biomass"),
    choice("endemic", "Endemic Species"),
];

pub static REGION_FILTER_OPTIONS: &[Choice] = &[
    choice("all", "All Regions"),
    choice("mediterranean", "Mediterranean"),
    choice("atlantic", "North Atlantic"),
    choice("pacific", "Pacific"),
    choice("indian", "Indian Ocean"),
];

pub static TIME_WINDOW_OPTIONS: &[Choice] = &[
    choice("1m", "Last Month"),
    choice("3m", "Last 3 Months"),
    choice("12m", "Last 12 Months"),
    choice("5y", "Last 5 Years"),
];

pub static DATA_SOURCE_OPTIONS: &[Choice] = &[
    choice("oceanographic", "Oceanographic Data"),
    choice("biodiversity", "Biodiversity Records"),
    choice("edna", "eDNA Sequences"),
    choice("taxonomy", "Taxonomy Data"),
];

pub static ANALYSIS_TYPE_OPTIONS: &[Choice] = &[
    choice("correlation", "Correlation Analysis"),
    choice("regression", "Regression Modeling"),
    choice("clustering", "Clustering Analysis"),
    choice("timeseries", "Time Series Analysis"),
];

pub static OUTPUT_FORMAT_OPTIONS: &[Choice] = &[
    choice("report", "Statistical Report"),
    choice("visualization", "Interactive Visualization"),
    choice("model", "Predictive Model"),
    choice("dashboard", "Live Dashboard"),
];
