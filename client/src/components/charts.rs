//! Inline SVG charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every chart takes plain vectors and delegates geometry to
//! `util::chart_math`. Charts are redrawn by their parent when the data
//! changes (the dashboard rebuilds its cards on region change), so props are
//! plain values rather than signals.

use leptos::prelude::*;

use crate::util::chart_math::{
    Viewbox, area_path, bar_rects, donut_arcs, join_points, polyline, radar_points, scatter,
};

/// Default drawing area for the rectangular charts.
pub const CHART_VIEWBOX: Viewbox = Viewbox::new(400.0, 200.0, 24.0);

const RADAR_SIZE: f64 = 240.0;
const RADAR_RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// One named line in a [`LineChart`]. Each series is scaled to its own
/// bounds, so mixed units share one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[component]
fn NoData() -> impl IntoView {
    view! { <div class="chart chart--empty">"No data"</div> }
}

#[component]
fn XLabels(labels: Vec<&'static str>) -> impl IntoView {
    view! {
        <div class="chart__x-labels">
            {labels.into_iter().map(|l| view! { <span>{l}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn LineChart(series: Vec<ChartSeries>, #[prop(optional)] labels: Vec<&'static str>) -> impl IntoView {
    if series.iter().all(|s| s.values.is_empty()) {
        return view! { <NoData/> }.into_any();
    }
    let vb = CHART_VIEWBOX;
    view! {
        <div class="chart chart--line">
            <svg viewBox=vb.attr() preserveAspectRatio="none">
                {series
                    .iter()
                    .map(|s| {
                        view! {
                            <polyline points=polyline(&s.values, vb) fill="none" stroke=s.color stroke-width="2"></polyline>
                        }
                    })
                    .collect_view()}
            </svg>
            <XLabels labels=labels/>
            <div class="chart__legend">
                {series
                    .into_iter()
                    .map(|s| {
                        view! {
                            <span class="chart__legend-item">
                                <span class="chart__swatch" style=format!("background: {};", s.color)></span>
                                {s.name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn AreaChart(values: Vec<f64>, #[prop(optional)] labels: Vec<&'static str>, color: &'static str) -> impl IntoView {
    if values.is_empty() {
        return view! { <NoData/> }.into_any();
    }
    let vb = CHART_VIEWBOX;
    view! {
        <div class="chart chart--area">
            <svg viewBox=vb.attr() preserveAspectRatio="none">
                <path d=area_path(&values, vb) fill=color fill-opacity="0.3" stroke=color></path>
            </svg>
            <XLabels labels=labels/>
        </div>
    }
    .into_any()
}

#[component]
pub fn BarChart(values: Vec<f64>, #[prop(optional)] labels: Vec<&'static str>, color: &'static str) -> impl IntoView {
    if values.is_empty() {
        return view! { <NoData/> }.into_any();
    }
    let vb = CHART_VIEWBOX;
    view! {
        <div class="chart chart--bar">
            <svg viewBox=vb.attr() preserveAspectRatio="none">
                {bar_rects(&values, vb, 8.0)
                    .into_iter()
                    .map(|r| {
                        view! {
                            <rect
                                x=format!("{:.2}", r.x)
                                y=format!("{:.2}", r.y)
                                width=format!("{:.2}", r.width)
                                height=format!("{:.2}", r.height)
                                fill=color
                                rx="3"
                            ></rect>
                        }
                    })
                    .collect_view()}
            </svg>
            <XLabels labels=labels/>
        </div>
    }
    .into_any()
}

/// Ring chart; `slices` are `(share, color)` pairs.
#[component]
pub fn DonutChart(slices: Vec<(f64, &'static str)>) -> impl IntoView {
    if slices.is_empty() {
        return view! { <NoData/> }.into_any();
    }
    let shares: Vec<f64> = slices.iter().map(|(share, _)| *share).collect();
    let arcs = donut_arcs(&shares, 100.0, 100.0, 80.0, 40.0);
    view! {
        <div class="chart chart--donut">
            <svg viewBox="0 0 200 200">
                {arcs
                    .into_iter()
                    .zip(slices)
                    .map(|(d, (_, color))| view! { <path d=d fill=color></path> })
                    .collect_view()}
            </svg>
        </div>
    }
    .into_any()
}

#[component]
pub fn RadarChart(axes: Vec<&'static str>, scores: Vec<f64>, full: f64, color: &'static str) -> impl IntoView {
    if scores.is_empty() {
        return view! { <NoData/> }.into_any();
    }
    let c = RADAR_SIZE / 2.0;
    let radius = c - 36.0;
    let outline: Vec<f64> = vec![full; scores.len()];
    let rings = RADAR_RINGS
        .iter()
        .map(|k| join_points(&radar_points(&outline, full, c, c, radius * k)))
        .collect::<Vec<_>>();
    let labels = radar_points(&outline, full, c, c, radius + 18.0);
    let shape = join_points(&radar_points(&scores, full, c, c, radius));
    view! {
        <div class="chart chart--radar">
            <svg viewBox=format!("0 0 {RADAR_SIZE} {RADAR_SIZE}")>
                {rings
                    .into_iter()
                    .map(|points| view! { <polygon points=points fill="none" class="chart__grid"></polygon> })
                    .collect_view()}
                <polygon points=shape fill=color fill-opacity="0.3" stroke=color stroke-width="2"></polygon>
                {labels
                    .into_iter()
                    .zip(axes)
                    .map(|((x, y), axis)| {
                        view! {
                            <text x=format!("{x:.1}") y=format!("{y:.1}") text-anchor="middle" class="chart__axis-label">
                                {axis}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
    .into_any()
}

#[component]
pub fn ScatterChart(xs: Vec<f64>, ys: Vec<f64>, color: &'static str) -> impl IntoView {
    let points = scatter(&xs, &ys, CHART_VIEWBOX);
    if points.is_empty() {
        return view! { <NoData/> }.into_any();
    }
    view! {
        <div class="chart chart--scatter">
            <svg viewBox=CHART_VIEWBOX.attr()>
                {points
                    .into_iter()
                    .map(|(x, y)| {
                        view! { <circle cx=format!("{x:.2}") cy=format!("{y:.2}") r="5" fill=color></circle> }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
    .into_any()
}
