//! Visualization controls: region, year and data layers.

use std::collections::BTreeSet;

use crate::data::ocean::RegionId;
use crate::data::visualization::LayerId;

#[cfg(test)]
#[path = "visualization_test.rs"]
mod visualization_test;

pub const YEAR_MIN: u16 = 2000;
pub const YEAR_MAX: u16 = 2024;

/// Set of switched-on map layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerSet(BTreeSet<LayerId>);

impl Default for LayerSet {
    fn default() -> Self {
        Self(LayerId::ALL.into_iter().filter(|l| l.enabled_by_default()).collect())
    }
}

impl LayerSet {
    /// Flip one layer. Returns whether it is active afterwards.
    pub fn toggle(&mut self, layer: LayerId) -> bool {
        if self.0.remove(&layer) {
            false
        } else {
            self.0.insert(layer);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, layer: LayerId) -> bool {
        self.0.contains(&layer)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Legend entries for active layers, in switch order.
    #[must_use]
    pub fn legend(&self) -> Vec<&'static str> {
        LayerId::ALL.into_iter().filter(|l| self.contains(*l)).filter_map(LayerId::legend).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizationControls {
    pub region: RegionId,
    year: u16,
    pub layers: LayerSet,
}

impl Default for VisualizationControls {
    fn default() -> Self {
        Self { region: RegionId::Global, year: YEAR_MAX, layers: LayerSet::default() }
    }
}

impl VisualizationControls {
    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Set the slider year, clamped to the supported range.
    pub fn set_year(&mut self, year: i64) {
        self.year = u16::try_from(year.clamp(i64::from(YEAR_MIN), i64::from(YEAR_MAX))).unwrap_or(YEAR_MAX);
    }

    /// Slider input handler; non-numeric input leaves the year unchanged.
    pub fn set_year_input(&mut self, raw: &str) {
        if let Ok(year) = raw.trim().parse::<i64>() {
            self.set_year(year);
        }
    }

    pub fn select_region(&mut self, raw: &str) {
        self.region = RegionId::parse_or_global(raw);
    }

    /// Map card description line.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Showing {} active layers for {} in {}", self.layers.len(), self.region.id(), self.year)
    }
}
