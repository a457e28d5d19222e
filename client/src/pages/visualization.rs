//! Interactive visualization page: map controls, temporal trend, hotspots.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::charts::AreaChart;
use crate::components::export_menu::{ExportMenu, table_exporter};
use crate::data::ocean::{CHART_1, RegionId};
use crate::data::visualization::{LayerId, SPECIES_HOTSPOTS, TEMPERATURE_TIMELINE, ThreatLevel};
use crate::state::visualization::{VisualizationControls, YEAR_MAX, YEAR_MIN};
use crate::util::format::thousands;

#[cfg(test)]
#[path = "visualization_test.rs"]
mod visualization_test;

#[component]
pub fn VisualizationPage() -> impl IntoView {
    let controls = RwSignal::new(VisualizationControls::default());
    let map_exporter = table_exporter("biodiversity-hotspots", SPECIES_HOTSPOTS);
    let data_exporter = table_exporter("temperature-timeline", TEMPERATURE_TIMELINE);

    let year = move || controls.with(VisualizationControls::year);

    view! {
        <div class="page visualization">
            <div class="page__header">
                <div>
                    <h1>"Interactive Ocean Visualization"</h1>
                    <p class="page__subtitle">"Explore marine data through interactive maps and temporal analysis"</p>
                </div>
            </div>

            <div class="grid grid--4">
                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Controls"</h3>
                    </div>
                    <div class="form">
                        <label class="form__label">"Geographic Region"</label>
                        <select
                            class="select"
                            on:change=move |ev| controls.update(|c| c.select_region(&event_target_value(&ev)))
                        >
                            {RegionId::ALL
                                .into_iter()
                                .map(|region| {
                                    view! {
                                        <option value=region.id() selected=move || controls.with(|c| c.region == region)>
                                            {region.data().name}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>

                        <label class="form__label">{move || format!("Time Period: {}", year())}</label>
                        <input
                            type="range"
                            class="slider"
                            min=YEAR_MIN.to_string()
                            max=YEAR_MAX.to_string()
                            step="1"
                            prop:value=move || year().to_string()
                            on:input=move |ev| controls.update(|c| c.set_year_input(&event_target_value(&ev)))
                        />
                        <div class="row row--between muted">
                            <span>{YEAR_MIN}</span>
                            <span>{YEAR_MAX}</span>
                        </div>

                        <label class="form__label">"Data Layers"</label>
                        {LayerId::ALL
                            .into_iter()
                            .map(|layer| {
                                view! {
                                    <label class="switch-row">
                                        <span>{layer.name()}</span>
                                        <input
                                            type="checkbox"
                                            class="switch"
                                            data-layer=layer.id()
                                            prop:checked=move || controls.with(|c| c.layers.contains(layer))
                                            on:change=move |_| {
                                                controls.update(|c| {
                                                    c.layers.toggle(layer);
                                                });
                                            }
                                        />
                                    </label>
                                }
                            })
                            .collect_view()}

                        <label class="form__label">"Export"</label>
                        <ExportMenu label="Export Map" exporter=map_exporter/>
                        <ExportMenu label="Export Data" exporter=data_exporter/>
                    </div>
                </div>

                <div class="card grid__span-3">
                    <div class="card__header">
                        <div class="row row--between">
                            <h3 class="card__title">"Interactive Ocean Map"</h3>
                            <div class="row">
                                <button class="btn btn--outline btn--sm">"Zoom"</button>
                                <button class="btn btn--outline btn--sm">"Layers"</button>
                            </div>
                        </div>
                        <p class="card__description">{move || controls.with(VisualizationControls::summary)}</p>
                    </div>
                    <div class="map">
                        <div class="map__overlay">
                            <span class="map__title">"Interactive Map Loading..."</span>
                            <p class="muted">"Click and drag to explore • Use controls to adjust layers"</p>
                        </div>
                        <div class="map__legend">
                            <h4>"Legend"</h4>
                            {move || {
                                controls
                                    .with(|c| c.layers.legend())
                                    .into_iter()
                                    .map(|entry| view! { <div class="map__legend-item">{entry}</div> })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid grid--2">
                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Temporal Analysis"</h3>
                        <p class="card__description">"Temperature trends over time"</p>
                    </div>
                    <AreaChart
                        values=TEMPERATURE_TIMELINE.iter().map(|p| p.value).collect()
                        labels=vec!["2020", "2021", "2022", "2023", "2024"]
                        color=CHART_1
                    />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Biodiversity Hotspots"</h3>
                        <p class="card__description">"Marine biodiversity distribution"</p>
                    </div>
                    <div class="stack">
                        {SPECIES_HOTSPOTS
                            .iter()
                            .map(|spot| {
                                view! {
                                    <div class="list-item row row--between">
                                        <div>
                                            <h4>{spot.name}</h4>
                                            <p class="muted">{format!("{} species", thousands(u64::from(spot.species)))}</p>
                                        </div>
                                        <div class="row">
                                            <Badge variant=threat_variant(spot.threat)>
                                                {format!("{} threat", spot.threat.label())}
                                            </Badge>
                                            <button class="btn btn--ghost btn--sm">"View"</button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn threat_variant(threat: ThreatLevel) -> BadgeVariant {
    match threat {
        ThreatLevel::High => BadgeVariant::Destructive,
        ThreatLevel::Medium => BadgeVariant::Secondary,
        ThreatLevel::Low => BadgeVariant::Outline,
    }
}
