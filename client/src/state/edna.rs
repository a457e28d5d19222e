//! eDNA view state: tabs, sequence upload form and analysis parameters.

use std::collections::BTreeSet;

use super::TabKind;
use crate::data::edna::REFERENCE_DATABASES;

#[cfg(test)]
#[path = "edna_test.rs"]
mod edna_test;

/// Reference databases offered as analysis targets.
pub const SELECTABLE_DATABASES: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdnaTab {
    #[default]
    Sequences,
    Analysis,
    Detection,
    References,
}

impl TabKind for EdnaTab {
    const ALL: &'static [Self] = &[Self::Sequences, Self::Analysis, Self::Detection, Self::References];

    fn id(self) -> &'static str {
        match self {
            Self::Sequences => "sequences",
            Self::Analysis => "analysis",
            Self::Detection => "detection",
            Self::References => "references",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Sequences => "Sequence Database",
            Self::Analysis => "eDNA Analysis",
            Self::Detection => "Species Detection",
            Self::References => "Reference Data",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeneMarker {
    #[default]
    Coi,
    Rrna16S,
    Rrna12S,
    Rrna18S,
    Its,
}

impl GeneMarker {
    pub const ALL: [GeneMarker; 5] =
        [GeneMarker::Coi, GeneMarker::Rrna16S, GeneMarker::Rrna12S, GeneMarker::Rrna18S, GeneMarker::Its];

    /// Markers offered as analysis target checkboxes.
    pub const TARGETS: [GeneMarker; 4] = [GeneMarker::Coi, GeneMarker::Rrna16S, GeneMarker::Rrna12S, GeneMarker::Rrna18S];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Coi => "COI",
            Self::Rrna16S => "16S",
            Self::Rrna12S => "12S",
            Self::Rrna18S => "18S",
            Self::Its => "ITS",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Coi => "COI (Cytochrome Oxidase I)",
            Self::Rrna16S => "16S rRNA",
            Self::Rrna12S => "12S rRNA",
            Self::Rrna18S => "18S rRNA",
            Self::Its => "ITS (Internal Transcribed Spacer)",
        }
    }

    /// Checkbox caption in the analysis parameters card.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Coi => "COI",
            other => other.label(),
        }
    }

    #[must_use]
    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdnaState {
    pub tab: EdnaTab,
    pub sequence_id: String,
    pub gene: GeneMarker,
    pub sequence_text: String,
    pub location: String,
    pub collection_date: String,
    pub target_genes: BTreeSet<GeneMarker>,
    pub databases: BTreeSet<&'static str>,
}

impl Default for EdnaState {
    fn default() -> Self {
        Self {
            tab: EdnaTab::default(),
            sequence_id: String::new(),
            gene: GeneMarker::Coi,
            sequence_text: String::new(),
            location: String::new(),
            collection_date: String::new(),
            target_genes: [GeneMarker::Coi, GeneMarker::Rrna16S].into_iter().collect(),
            databases: REFERENCE_DATABASES.iter().take(SELECTABLE_DATABASES).map(|db| db.name).collect(),
        }
    }
}

impl EdnaState {
    /// Unknown marker values keep the current selection.
    pub fn set_gene(&mut self, raw: &str) {
        if let Some(gene) = GeneMarker::from_value(raw) {
            self.gene = gene;
        }
    }

    pub fn toggle_target_gene(&mut self, gene: GeneMarker) -> bool {
        toggle_in(&mut self.target_genes, gene)
    }

    pub fn toggle_database(&mut self, name: &'static str) -> bool {
        toggle_in(&mut self.databases, name)
    }
}

fn toggle_in<T: Ord>(set: &mut BTreeSet<T>, item: T) -> bool {
    if set.remove(&item) {
        false
    } else {
        set.insert(item);
        true
    }
}

/// Caption of the database search button.
#[must_use]
pub fn search_button_label(searching: bool) -> &'static str {
    if searching { "Searching..." } else { "Search Databases" }
}

/// Caption of the sample analysis button; shares the search task.
#[must_use]
pub fn analysis_button_label(running: bool) -> &'static str {
    if running { "Analyzing..." } else { "Start Analysis" }
}
