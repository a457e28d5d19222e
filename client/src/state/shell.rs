//! Application shell state: active module, navigation drawer, chat dialog.
//!
//! DESIGN
//! ======
//! The shell owns the only cross-module state in the app. It is a single
//! `RwSignal<ShellState>` provided by `App`; module pages never read it for
//! anything but navigation, and never write each other's local state.

use std::str::FromStr;

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// Error returned when a module id string does not name a known module.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown module id: {0}")]
pub struct UnknownModule(pub String);

/// Top-level dashboard screens reachable from the navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModuleId {
    #[default]
    Dashboard,
    DataIntegration,
    Visualization,
    Taxonomy,
    Edna,
    Analysis,
    Collaboration,
}

impl ModuleId {
    /// Every module in drawer order.
    pub const ALL: [ModuleId; 7] = [
        ModuleId::Dashboard,
        ModuleId::DataIntegration,
        ModuleId::Visualization,
        ModuleId::Taxonomy,
        ModuleId::Edna,
        ModuleId::Analysis,
        ModuleId::Collaboration,
    ];

    /// Stable string id used by navigation controls.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::DataIntegration => "data-integration",
            Self::Visualization => "visualization",
            Self::Taxonomy => "taxonomy",
            Self::Edna => "edna",
            Self::Analysis => "analysis",
            Self::Collaboration => "collaboration",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::DataIntegration => "Data Integration",
            Self::Visualization => "Interactive Visualization",
            Self::Taxonomy => "Taxonomy & Otolith Morphology",
            Self::Edna => "Molecular & eDNA Data",
            Self::Analysis => "Cross-Disciplinary Analysis",
            Self::Collaboration => "Collaboration Hub",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Dashboard => "Real-time oceanographic monitoring",
            Self::DataIntegration => "Upload & validate datasets",
            Self::Visualization => "Ocean maps & timeline analysis",
            Self::Taxonomy => "Species classification & 3D analysis",
            Self::Edna => "DNA sequence analysis",
            Self::Analysis => "AI-driven insights",
            Self::Collaboration => "Role-based team sharing",
        }
    }
}

impl FromStr for ModuleId {
    type Err = UnknownModule;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == raw)
            .ok_or_else(|| UnknownModule(raw.to_owned()))
    }
}

/// Shell chrome state. Drawer and chat flags are independent of each other
/// and of the active module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub active_module: ModuleId,
    pub drawer_open: bool,
    pub chat_open: bool,
}

impl ShellState {
    /// Activate the module named by `id` and close the drawer.
    ///
    /// Unknown ids fall back to the dashboard. Returns the module that is
    /// active afterwards.
    pub fn select_module(&mut self, id: &str) -> ModuleId {
        let module = id.parse::<ModuleId>().unwrap_or_else(|err| {
            log::warn!("{err}; falling back to dashboard");
            ModuleId::Dashboard
        });
        self.open_module(module);
        module
    }

    /// Typed variant of [`ShellState::select_module`].
    pub fn open_module(&mut self, module: ModuleId) {
        log::debug!("module selected: {}", module.id());
        self.active_module = module;
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn set_drawer_open(&mut self, open: bool) {
        self.drawer_open = open;
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    pub fn set_chat_open(&mut self, open: bool) {
        self.chat_open = open;
    }
}
