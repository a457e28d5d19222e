//! Dashboard page: live oceanographic overview for one region.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing module. The region picker is the only wired filter in
//! the app: every card below it reads the selected region's table, so the
//! whole card grid is rebuilt when the region changes.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::charts::{ChartSeries, DonutChart, LineChart, RadarChart};
use crate::components::metric_card::MetricCard;
use crate::components::progress_bar::ProgressBar;
use crate::data::ocean::{
    AlertKind, CHART_1, CHART_2, CHART_3, CHART_DEEP, DEPTH_PROFILE, ECOSYSTEM_HEALTH, OceanRegion, ParameterStatus,
    RegionId,
};
use crate::state::dashboard::{DashboardView, HealthGrade};
use crate::util::clock::today_label;
use crate::util::format::{compact_decimal, signed_count, signed_decimal, thousands};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let view_state = RwSignal::new(DashboardView::default());
    let today = RwSignal::new(String::new());
    Effect::new(move || today.set(today_label()));

    let on_region = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        view_state.update(|v| {
            v.select_region(&raw);
        });
    };
    let region_name = move || view_state.with(|v| v.data().name);

    view! {
        <div class="page dashboard">
            <div class="page__header">
                <div>
                    <h1>"Blue Nexus Dashboard"</h1>
                    <p class="page__subtitle">"Real-time oceanographic monitoring and ecosystem health assessment"</p>
                </div>
                <div class="page__header-badges">
                    <Badge variant=BadgeVariant::Outline>
                        <span class="pulse-dot"></span>
                        "Live Data"
                    </Badge>
                    <Badge variant=BadgeVariant::Secondary>{move || today.get()}</Badge>
                </div>
            </div>

            <div class="dashboard__region">
                <span class="dashboard__region-label">"Ocean Region:"</span>
                <select class="select" on:change=on_region>
                    {RegionId::ALL
                        .into_iter()
                        .map(|region| {
                            let data = region.data();
                            view! {
                                <option
                                    value=region.id()
                                    title=data.description
                                    selected=move || view_state.with(|v| v.region == region)
                                >
                                    {data.name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <Badge variant=BadgeVariant::Outline>{region_name}</Badge>
            </div>

            {move || {
                let state = view_state.get();
                region_cards(state.data(), state.health_grade())
            }}
        </div>
    }
}

fn region_cards(data: &'static OceanRegion, grade: HealthGrade) -> impl IntoView {
    let times: Vec<&'static str> = data.readings.iter().map(|r| r.time).collect();
    let series = vec![
        ChartSeries { name: "Temperature (°C)", color: CHART_1, values: data.readings.iter().map(|r| r.temp).collect() },
        ChartSeries { name: "Salinity (PSU)", color: CHART_2, values: data.readings.iter().map(|r| r.salinity).collect() },
        ChartSeries { name: "Oxygen (mg/L)", color: CHART_3, values: data.readings.iter().map(|r| r.oxygen).collect() },
    ];
    let slices = data.biodiversity.iter().map(|s| (s.percentage, s.color)).collect::<Vec<_>>();
    let health = f64::from(data.ecosystem_health);

    view! {
        <div class="dashboard__alerts">
            {data
                .alerts
                .iter()
                .map(|alert| {
                    view! {
                        <div class=alert_class(alert.kind)>
                            <strong>{alert.title}</strong>
                            " - "
                            {alert.description}
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <div class="grid grid--4">
            <MetricCard
                title="Water Temperature"
                value=format!("{}°C", data.temperature)
                detail=format!("{}°C from yesterday", signed_decimal(data.temp_trend))
                accent=trend_class(data.temp_trend)
            />
            <MetricCard
                title="Species Richness"
                value=thousands(u64::from(data.species))
                detail=format!("{} species logged today", signed_count(data.species_trend))
                accent=trend_class(f64::from(data.species_trend))
            />
            <MetricCard
                title="Current Velocity"
                value=format!("{} m/s", data.current_velocity)
                detail=format!("Direction: {}", data.current_direction)
            />
            <MetricCard title="Ecosystem Health" value=format!("{}%", data.ecosystem_health) detail="">
                <ProgressBar value=Signal::derive(move || health)/>
                <Badge variant=BadgeVariant::Secondary>{grade.label()}</Badge>
            </MetricCard>
        </div>

        <div class="grid grid--3">
            <div class="card grid__span-2">
                <div class="card__header">
                    <h3 class="card__title">{format!("Oceanographic Parameters (24h) - {}", data.name)}</h3>
                    <p class="card__description">"Real-time temperature, salinity, and dissolved oxygen monitoring"</p>
                </div>
                <LineChart series=series labels=times/>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">{format!("Species Distribution - {}", data.name)}</h3>
                    <p class="card__description">"Marine biodiversity composition with population metrics"</p>
                </div>
                <DonutChart slices=slices/>
                <div class="legend-list">
                    {data
                        .biodiversity
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="legend-list__row">
                                    <span class="chart__swatch" style=format!("background: {};", s.color)></span>
                                    <span class="legend-list__name">{s.group}</span>
                                    <span class="legend-list__count">{thousands(u64::from(s.count))}</span>
                                    <span class="legend-list__share">{format!("{}%", s.percentage)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>

        <div class="grid grid--3">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Ocean Depth Profile Analysis"</h3>
                    <p class="card__description">"Current velocity, temperature, and pressure by depth"</p>
                </div>
                <LineChart
                    series=vec![
                        ChartSeries {
                            name: "Current Velocity (m/s)",
                            color: CHART_DEEP,
                            values: DEPTH_PROFILE.iter().map(|d| d.velocity).collect(),
                        },
                        ChartSeries {
                            name: "Temperature (°C)",
                            color: CHART_1,
                            values: DEPTH_PROFILE.iter().map(|d| d.temperature).collect(),
                        },
                    ]
                    labels=DEPTH_PROFILE.iter().map(|d| d.depth).collect()
                />
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">{format!("Water Quality Parameters - {}", data.name)}</h3>
                    <p class="card__description">"Real-time chemical analysis with optimal ranges"</p>
                </div>
                <div class="param-list">
                    {data
                        .chemistry
                        .iter()
                        .map(|p| {
                            view! {
                                <div class="param-list__row">
                                    <div class="param-list__head">
                                        <span class="param-list__name">{p.parameter}</span>
                                        <span class="param-list__value">{format!("{}{}", compact_decimal(p.value), p.unit)}</span>
                                        <Badge variant=status_variant(p.status)>{p.status.label()}</Badge>
                                    </div>
                                    <div class="param-list__meta">
                                        <span>{format!("Optimal: {}{}", compact_decimal(p.optimal), p.unit)}</span>
                                        <span>{format!("Current: {}{}", compact_decimal(p.value), p.unit)}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">{format!("Ecosystem Health Radar - {}", data.name)}</h3>
                    <p class="card__description">"Comprehensive health assessment across multiple indicators"</p>
                </div>
                <RadarChart
                    axes=ECOSYSTEM_HEALTH.iter().map(|h| h.metric).collect()
                    scores=ECOSYSTEM_HEALTH.iter().map(|h| f64::from(h.score)).collect()
                    full=100.0
                    color=CHART_1
                />
            </div>
        </div>
    }
}

fn alert_class(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Warning => "alert alert--warning",
        AlertKind::Info => "alert alert--info",
    }
}

fn trend_class(trend: f64) -> &'static str {
    if trend > 0.0 { "trend--up" } else { "trend--down" }
}

fn status_variant(status: ParameterStatus) -> BadgeVariant {
    match status {
        ParameterStatus::Normal => BadgeVariant::Secondary,
        ParameterStatus::Elevated => BadgeVariant::Destructive,
        ParameterStatus::Low => BadgeVariant::Outline,
    }
}
