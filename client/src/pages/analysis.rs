//! Cross-disciplinary analysis page.
//!
//! The axis, region and time selectors record their value but do not change
//! the correlation data or the headline statistics.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::charts::{BarChart, ChartSeries, LineChart, ScatterChart};
use crate::components::export_menu::{ExportMenu, table_exporter};
use crate::components::tab_bar::TabBar;
use crate::data::analysis::{AI_INSIGHTS, ANALYSIS_TEMPLATES, CORRELATION_DATA, Impact, MODEL_PERFORMANCE, TREND_SAMPLE_LEN};
use crate::data::ocean::{CHART_1, CHART_2};
use crate::state::analysis::{AnalysisControls, AnalysisTab, Selector};
use crate::util::format::thousands;

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let controls = RwSignal::new(AnalysisControls::default());
    let tab = Memo::new(move |_| controls.with(|c| c.tab));

    view! {
        <div class="page analysis">
            <div class="page__header">
                <div>
                    <h1>"Cross-Disciplinary Analysis"</h1>
                    <p class="page__subtitle">"AI-powered insights and correlation analysis across marine datasets"</p>
                </div>
            </div>
            <TabBar
                active=Signal::derive(move || tab.get())
                on_select=Callback::new(move |t| controls.update(|c| c.tab = t))
            />
            {move || match tab.get() {
                AnalysisTab::Correlations => view! { <CorrelationsTab controls=controls/> }.into_any(),
                AnalysisTab::Insights => view! { <InsightsTab/> }.into_any(),
                AnalysisTab::Templates => view! { <TemplatesTab controls=controls/> }.into_any(),
                AnalysisTab::Models => view! { <ModelsTab/> }.into_any(),
            }}
        </div>
    }
}

/// Select bound to one [`Selector`] of the analysis controls.
#[component]
fn ChoiceSelect(
    controls: RwSignal<AnalysisControls>,
    selector: Selector,
    label: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let current = move || controls.with(|c| c.value(selector));
    view! {
        <label class="form__label">{label}</label>
        <select
            class="select"
            on:change=move |ev| {
                controls.update(|c| {
                    c.select(selector, &event_target_value(&ev));
                });
            }
        >
            {placeholder
                .map(|p| {
                    view! {
                        <option value="" selected=move || current().is_none()>
                            {p}
                        </option>
                    }
                })}
            {selector
                .options()
                .iter()
                .map(|choice| {
                    let value = choice.value;
                    view! {
                        <option value=value selected=move || current() == Some(value)>
                            {choice.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn CorrelationsTab(controls: RwSignal<AnalysisControls>) -> impl IntoView {
    let (series, stats) = controls.with_untracked(|c| (c.correlation_series(), c.headline_stats()));
    let trend = &series[..TREND_SAMPLE_LEN.min(series.len())];
    let data_exporter = table_exporter("correlation-data", CORRELATION_DATA);
    let trend_exporter = table_exporter("temporal-trends", trend);
    let regional_exporter = table_exporter("regional-comparison", trend);

    view! {
        <div class="grid grid--4">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Analysis Controls"</h3>
                </div>
                <div class="form">
                    <ChoiceSelect controls=controls selector=Selector::XAxis label="X-Axis Variable"/>
                    <ChoiceSelect controls=controls selector=Selector::YAxis label="Y-Axis Variable"/>
                    <ChoiceSelect controls=controls selector=Selector::Region label="Region Filter"/>
                    <ChoiceSelect controls=controls selector=Selector::TimeWindow label="Time Period"/>
                    <button class="btn btn--block">"Run Analysis"</button>
                </div>
            </div>

            <div class="card grid__span-3">
                <div class="card__header row row--between">
                    <div>
                        <h3 class="card__title">"Correlation Analysis: Temperature vs Species Diversity"</h3>
                        <p class="card__description">
                            "Scatter plot showing relationship between environmental parameters and biodiversity"
                        </p>
                    </div>
                    <ExportMenu label="Export Chart" exporter=data_exporter/>
                </div>
                <ScatterChart
                    xs=series.iter().map(|p| p.temperature).collect()
                    ys=series.iter().map(|p| p.diversity).collect()
                    color=CHART_1
                />
                <div class="grid grid--3 stat-row">
                    <div class="stat">
                        <div class="stat__value stat__value--negative">{stats.correlation}</div>
                        <div class="muted">"Correlation Coefficient"</div>
                    </div>
                    <div class="stat">
                        <div class="stat__value stat__value--positive">{stats.r_squared}</div>
                        <div class="muted">"R-squared"</div>
                    </div>
                    <div class="stat">
                        <div class="stat__value">{stats.significance}</div>
                        <div class="muted">"Significance"</div>
                    </div>
                </div>
            </div>
        </div>

        <div class="grid grid--2">
            <div class="card">
                <div class="card__header row row--between">
                    <div>
                        <h3 class="card__title">"Temporal Trends"</h3>
                        <p class="card__description">"Biodiversity changes over time"</p>
                    </div>
                    <ExportMenu label="Export" exporter=trend_exporter/>
                </div>
                <LineChart series=vec![ChartSeries {
                    name: "Species Diversity",
                    color: CHART_1,
                    values: trend.iter().map(|p| p.diversity).collect(),
                }]/>
            </div>
            <div class="card">
                <div class="card__header row row--between">
                    <div>
                        <h3 class="card__title">"Regional Comparison"</h3>
                        <p class="card__description">"Biodiversity by geographic region"</p>
                    </div>
                    <ExportMenu label="Export" exporter=regional_exporter/>
                </div>
                <BarChart
                    values=trend.iter().map(|p| p.diversity).collect()
                    labels=trend.iter().map(|p| p.zone).collect()
                    color=CHART_2
                />
            </div>
        </div>
    }
}

#[component]
fn InsightsTab() -> impl IntoView {
    let exporter = table_exporter("ai-insights", AI_INSIGHTS);
    view! {
        <div class="card">
            <div class="card__header row row--between">
                <div>
                    <h3 class="card__title">"AI-Generated Insights"</h3>
                    <p class="card__description">"Machine learning analysis of cross-disciplinary patterns"</p>
                </div>
                <ExportMenu label="Export" exporter=exporter/>
            </div>
            <div class="stack">
                {AI_INSIGHTS
                    .iter()
                    .map(|insight| {
                        view! {
                            <div class="list-item">
                                <h4>{insight.title}</h4>
                                <p class="muted">{insight.insight}</p>
                                <div class="row">
                                    <Badge variant=BadgeVariant::for_confidence(insight.confidence)>
                                        {format!("{}% confidence", insight.confidence)}
                                    </Badge>
                                    <Badge variant=impact_variant(insight.impact)>
                                        {format!("{} impact", insight.impact.label())}
                                    </Badge>
                                    <Badge variant=BadgeVariant::Outline>{insight.kind}</Badge>
                                    <button class="btn btn--ghost btn--sm">"Details"</button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TemplatesTab(controls: RwSignal<AnalysisControls>) -> impl IntoView {
    let builder_exporter = table_exporter("model-performance", MODEL_PERFORMANCE);
    view! {
        <div class="grid grid--2">
            {ANALYSIS_TEMPLATES
                .iter()
                .map(|template| {
                    let name = template.name;
                    let selected = move || controls.with(|c| c.template == Some(name));
                    view! {
                        <div class="card" class:card--selected=selected>
                            <div class="card__header">
                                <h3 class="card__title">{name}</h3>
                                <p class="card__description">
                                    {format!("Pre-configured analysis template for {}", name.to_lowercase())}
                                </p>
                            </div>
                            <label class="form__label">"Analysis Variables:"</label>
                            <div class="tag-row">
                                {template
                                    .variables
                                    .iter()
                                    .map(|v| view! { <Badge variant=BadgeVariant::Outline>{*v}</Badge> })
                                    .collect_view()}
                            </div>
                            <button
                                class="btn btn--block"
                                on:click=move |_| {
                                    controls.update(|c| {
                                        c.use_template(name);
                                    });
                                }
                            >
                                "Use Template"
                            </button>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Custom Analysis Builder"</h3>
                <p class="card__description">"Create your own analysis workflow"</p>
            </div>
            <div class="grid grid--3">
                <div>
                    <ChoiceSelect
                        controls=controls
                        selector=Selector::DataSource
                        label="Data Sources"
                        placeholder="Select data sources"
                    />
                </div>
                <div>
                    <ChoiceSelect
                        controls=controls
                        selector=Selector::AnalysisType
                        label="Analysis Type"
                        placeholder="Select analysis type"
                    />
                </div>
                <div>
                    <ChoiceSelect
                        controls=controls
                        selector=Selector::OutputFormat
                        label="Output Format"
                        placeholder="Select output"
                    />
                </div>
            </div>
            <div class="row">
                <button class="btn btn--grow">"Build Custom Analysis"</button>
                <ExportMenu label="Export" exporter=builder_exporter/>
            </div>
        </div>
    }
}

#[component]
fn ModelsTab() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Model Performance Dashboard"</h3>
                <p class="card__description">"AI model accuracy and validation metrics"</p>
            </div>
            <div class="stack">
                {MODEL_PERFORMANCE
                    .iter()
                    .map(|m| {
                        view! {
                            <div class="list-item">
                                <div class="row row--between">
                                    <div>
                                        <h4>{m.model}</h4>
                                        <p class="muted">{format!("{} training samples", thousands(u64::from(m.samples)))}</p>
                                    </div>
                                    <div class="row">
                                        <Badge variant=BadgeVariant::Secondary>"v2.1"</Badge>
                                        <Badge variant=BadgeVariant::Outline>"Production"</Badge>
                                    </div>
                                </div>
                                <div class="grid grid--3">
                                    <div>
                                        <div class="muted">"Accuracy"</div>
                                        <div class="stat__value">{format!("{}%", m.accuracy)}</div>
                                    </div>
                                    <div>
                                        <div class="muted">"F1 Score"</div>
                                        <div class="stat__value">{format!("{:.2}", m.f1_score)}</div>
                                    </div>
                                    <div class="align-right">
                                        <button class="btn btn--ghost btn--sm">"Configure"</button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn impact_variant(impact: Impact) -> BadgeVariant {
    match impact {
        Impact::High => BadgeVariant::Destructive,
        Impact::Medium => BadgeVariant::Secondary,
        Impact::Low => BadgeVariant::Outline,
    }
}
