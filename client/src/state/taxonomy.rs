//! Taxonomy view state: identification flow, tree visibility, otolith view.
//!
//! DESIGN
//! ======
//! The phylogenetic tree has two presentations (a preview before
//! identification, the full pathway after). Both render through one
//! component; `TreeVariant` carries the copy that differs.

use super::TabKind;

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod taxonomy_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaxonomyTab {
    #[default]
    Classification,
    Otolith,
}

impl TabKind for TaxonomyTab {
    const ALL: &'static [Self] = &[Self::Classification, Self::Otolith];

    fn id(self) -> &'static str {
        match self {
            Self::Classification => "classification",
            Self::Otolith => "otolith",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Classification => "Species Identification",
            Self::Otolith => "Otolith Analysis",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OtolithView {
    #[default]
    TwoD,
    ThreeD,
}

impl OtolithView {
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::TwoD => "2d",
            Self::ThreeD => "3d",
        }
    }

    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        if raw == "3d" { Self::ThreeD } else { Self::TwoD }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeVariant {
    Preview,
    Full,
}

impl TreeVariant {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Preview => "Taxonomic Hierarchy Preview",
            Self::Full => "Taxonomic Hierarchy",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Preview => "Phylogenetic classification pathway",
            Self::Full => "Complete phylogenetic classification pathway",
        }
    }

    /// Verb on the tree toggle button while the tree is hidden.
    #[must_use]
    pub fn show_verb(self) -> &'static str {
        match self {
            Self::Preview => "Preview",
            Self::Full => "View",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaxonomyState {
    pub tab: TaxonomyTab,
    pub search_query: String,
    /// Taxonomic level filter. Stored but does not filter anything.
    pub classification_filter: Option<&'static str>,
    pub otolith_view: OtolithView,
    pub show_tree: bool,
    pub analysis_complete: bool,
}

impl TaxonomyState {
    pub const LEVEL_FILTERS: [(&'static str, &'static str); 3] =
        [("family", "Family"), ("genus", "Genus"), ("species", "Species")];

    /// Run the (simulated) identification. Idempotent.
    pub fn identify(&mut self) {
        if !self.analysis_complete {
            log::info!("species identification complete");
        }
        self.analysis_complete = true;
    }

    pub fn toggle_tree(&mut self) {
        self.show_tree = !self.show_tree;
    }

    pub fn reveal_tree(&mut self) {
        self.show_tree = true;
    }

    pub fn set_classification_filter(&mut self, raw: &str) {
        self.classification_filter = Self::LEVEL_FILTERS.iter().map(|(v, _)| *v).find(|v| *v == raw);
    }

    #[must_use]
    pub fn tree_variant(&self) -> TreeVariant {
        if self.analysis_complete { TreeVariant::Full } else { TreeVariant::Preview }
    }

    /// Caption for the tree toggle button.
    #[must_use]
    pub fn tree_button_label(&self) -> String {
        let verb = if self.show_tree { "Hide" } else { self.tree_variant().show_verb() };
        format!("{verb} Taxonomic Tree")
    }
}
