//! Dashboard region selection and health grading.

use crate::data::ocean::{OceanRegion, RegionId};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Qualitative grade shown under the ecosystem health score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthGrade {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Excellent,
            80..=89 => Self::Good,
            70..=79 => Self::Fair,
            _ => Self::Poor,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub region: RegionId,
}

impl DashboardView {
    /// Switch the region from a picker value. Unknown values show the
    /// global aggregate.
    pub fn select_region(&mut self, raw: &str) -> RegionId {
        self.region = RegionId::parse_or_global(raw);
        self.region
    }

    #[must_use]
    pub fn data(&self) -> &'static OceanRegion {
        self.region.data()
    }

    #[must_use]
    pub fn health_grade(&self) -> HealthGrade {
        HealthGrade::from_score(self.data().ecosystem_health)
    }
}
