//! Horizontal fill bar for percentages.

use leptos::prelude::*;

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

/// Clamp to `0..=100`; NaN renders as empty.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

#[must_use]
pub fn fill_style(value: f64) -> String {
    format!("width: {}%;", clamp_percent(value))
}

#[component]
pub fn ProgressBar(value: Signal<f64>, #[prop(optional)] thin: bool) -> impl IntoView {
    view! {
        <div class="progress" class:progress--thin=thin role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=move || clamp_percent(value.get()).to_string()>
            <div class="progress__fill" style=move || fill_style(value.get())></div>
        </div>
    }
}
