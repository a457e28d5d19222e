//! Analysis view state.
//!
//! DESIGN
//! ======
//! The axis, region and time selectors are display-only: they record the
//! chosen option but the correlation series and headline statistics are the
//! same fixed sample regardless of selection.

use super::TabKind;
use crate::data::analysis::{
    ANALYSIS_TEMPLATES, ANALYSIS_TYPE_OPTIONS, CORRELATION_DATA, CorrelationPoint, DATA_SOURCE_OPTIONS,
    HEADLINE_STATS, HeadlineStats, OUTPUT_FORMAT_OPTIONS, REGION_FILTER_OPTIONS, TIME_WINDOW_OPTIONS,
    X_AXIS_OPTIONS, Y_AXIS_OPTIONS,
};
use crate::data::{Choice, find_choice};

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisTab {
    #[default]
    Correlations,
    Insights,
    Templates,
    Models,
}

impl TabKind for AnalysisTab {
    const ALL: &'static [Self] = &[Self::Correlations, Self::Insights, Self::Templates, Self::Models];

    fn id(self) -> &'static str {
        match self {
            Self::Correlations => "correlations",
            Self::Insights => "insights",
            Self::Templates => "templates",
            Self::Models => "models",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Correlations => "Correlations",
            Self::Insights => "AI Insights",
            Self::Templates => "Analysis Templates",
            Self::Models => "Model Performance",
        }
    }
}

/// Named select controls on the analysis view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    XAxis,
    YAxis,
    Region,
    TimeWindow,
    DataSource,
    AnalysisType,
    OutputFormat,
}

impl Selector {
    #[must_use]
    pub fn options(self) -> &'static [Choice] {
        match self {
            Self::XAxis => X_AXIS_OPTIONS,
            Self::YAxis => Y_AXIS_OPTIONS,
            Self::Region => REGION_FILTER_OPTIONS,
            Self::TimeWindow => TIME_WINDOW_OPTIONS,
            Self::DataSource => DATA_SOURCE_OPTIONS,
            Self::AnalysisType => ANALYSIS_TYPE_OPTIONS,
            Self::OutputFormat => OUTPUT_FORMAT_OPTIONS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisControls {
    pub tab: AnalysisTab,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
    pub region: Option<&'static str>,
    pub time_window: Option<&'static str>,
    pub data_source: Option<&'static str>,
    pub analysis_type: Option<&'static str>,
    pub output_format: Option<&'static str>,
    pub template: Option<&'static str>,
}

impl Default for AnalysisControls {
    fn default() -> Self {
        Self {
            tab: AnalysisTab::default(),
            x_axis: "temperature",
            y_axis: "diversity",
            region: Some("all"),
            time_window: Some("12m"),
            data_source: None,
            analysis_type: None,
            output_format: None,
            template: None,
        }
    }
}

impl AnalysisControls {
    /// Record a selector value. An empty value resets the selector to its
    /// placeholder. Values outside the selector's options are ignored and
    /// `false` is returned.
    pub fn select(&mut self, selector: Selector, raw: &str) -> bool {
        if raw.is_empty() {
            return self.clear(selector);
        }
        let Some(choice) = find_choice(selector.options(), raw) else {
            log::debug!("ignoring unknown {selector:?} value {raw:?}");
            return false;
        };
        let value = choice.value;
        match selector {
            Selector::XAxis => self.x_axis = value,
            Selector::YAxis => self.y_axis = value,
            Selector::Region => self.region = Some(value),
            Selector::TimeWindow => self.time_window = Some(value),
            Selector::DataSource => self.data_source = Some(value),
            Selector::AnalysisType => self.analysis_type = Some(value),
            Selector::OutputFormat => self.output_format = Some(value),
        }
        true
    }

    /// Current value of `selector`, `None` while it shows its placeholder.
    #[must_use]
    pub fn value(&self, selector: Selector) -> Option<&'static str> {
        match selector {
            Selector::XAxis => Some(self.x_axis),
            Selector::YAxis => Some(self.y_axis),
            Selector::Region => self.region,
            Selector::TimeWindow => self.time_window,
            Selector::DataSource => self.data_source,
            Selector::AnalysisType => self.analysis_type,
            Selector::OutputFormat => self.output_format,
        }
    }

    /// Reset an optional selector to its placeholder. The axes always hold a
    /// value and cannot be cleared.
    pub fn clear(&mut self, selector: Selector) -> bool {
        let slot = match selector {
            Selector::XAxis | Selector::YAxis => return false,
            Selector::Region => &mut self.region,
            Selector::TimeWindow => &mut self.time_window,
            Selector::DataSource => &mut self.data_source,
            Selector::AnalysisType => &mut self.analysis_type,
            Selector::OutputFormat => &mut self.output_format,
        };
        *slot = None;
        true
    }

    /// Remember the template picked with "Use Template".
    pub fn use_template(&mut self, name: &str) -> bool {
        match ANALYSIS_TEMPLATES.iter().find(|t| t.name == name) {
            Some(template) => {
                self.template = Some(template.name);
                true
            }
            None => false,
        }
    }

    /// Scatter series. Independent of the selectors.
    #[must_use]
    pub fn correlation_series(&self) -> &'static [CorrelationPoint] {
        CORRELATION_DATA
    }

    #[must_use]
    pub fn headline_stats(&self) -> HeadlineStats {
        HEADLINE_STATS
    }
}
