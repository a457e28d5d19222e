//! Static sample tables rendered by the module views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the dashboard shows is fixed sample data compiled into the
//! bundle. Tables are `&'static` slices so views borrow them without cloning,
//! and every row type derives `Serialize` for the export menus.

pub mod analysis;
pub mod collaboration;
pub mod datasets;
pub mod edna;
pub mod ocean;
pub mod taxonomy;
pub mod visualization;

/// One entry of a select control: submitted value and display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Look up the choice whose value is `value`.
#[must_use]
pub fn find_choice(choices: &'static [Choice], value: &str) -> Option<&'static Choice> {
    choices.iter().find(|c| c.value == value)
}

pub(crate) const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}
