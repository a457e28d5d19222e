//! Headline number card for the dashboard overview row.

use leptos::prelude::*;

#[component]
pub fn MetricCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] detail: String,
    #[prop(optional)] accent: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="card metric-card">
            <div class="metric-card__header">
                <span class="metric-card__title">{title}</span>
                <span class=format!("metric-card__icon {accent}")></span>
            </div>
            <div class="metric-card__value">{value}</div>
            <p class="metric-card__detail">{detail}</p>
            {children.map(|c| c())}
        </div>
    }
}
