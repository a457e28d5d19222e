//! Small status pill used by lists, alerts, and classification rows.

use leptos::prelude::*;

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl BadgeVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "badge badge--default",
            Self::Secondary => "badge badge--secondary",
            Self::Outline => "badge badge--outline",
            Self::Destructive => "badge badge--destructive",
        }
    }

    /// Confidence percentages above 90 read as default, above 80 as
    /// secondary, anything else as outline.
    #[must_use]
    pub fn for_confidence(confidence: u8) -> Self {
        match confidence {
            91..=u8::MAX => Self::Default,
            81..=90 => Self::Secondary,
            _ => Self::Outline,
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=variant.class()>{children()}</span> }
}
