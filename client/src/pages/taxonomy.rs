//! Taxonomy & otolith morphology page.
//!
//! DESIGN
//! ======
//! The taxonomic tree has a single render path. Whether identification has
//! run only picks the [`TreeVariant`] (titles and button verbs); the hierarchy
//! rows, quick-navigation cards and export menu are shared.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::export_menu::{ExportMenu, table_exporter};
use crate::components::tab_bar::TabBar;
use crate::data::taxonomy::{
    IDENTIFIED_COMMON_NAME, IDENTIFIED_SPECIES, OTOLITH_MEASUREMENTS, RECENT_CLASSIFICATIONS, RELATED_TAXA,
    ReviewStatus, SHAPE_INDICES, TAXONOMY_HIERARCHY,
};
use crate::state::taxonomy::{OtolithView, TaxonomyState, TaxonomyTab, TreeVariant};

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod taxonomy_test;

#[component]
pub fn TaxonomyPage() -> impl IntoView {
    let state = RwSignal::new(TaxonomyState::default());
    let tab = Memo::new(move |_| state.with(|s| s.tab));

    view! {
        <div class="page taxonomy">
            <div class="page__header">
                <div>
                    <h1>"Taxonomy & Otolith Morphology"</h1>
                    <p class="page__subtitle">
                        "Species identification and otolith shape analysis for marine biodiversity studies"
                    </p>
                </div>
            </div>
            <TabBar
                active=Signal::derive(move || tab.get())
                on_select=Callback::new(move |t| state.update(|s| s.tab = t))
            />
            {move || match tab.get() {
                TaxonomyTab::Classification => view! { <ClassificationTab state=state/> }.into_any(),
                TaxonomyTab::Otolith => view! { <OtolithTab state=state/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ClassificationTab(state: RwSignal<TaxonomyState>) -> impl IntoView {
    let show_tree = Memo::new(move |_| state.with(|s| s.show_tree));
    let variant = Memo::new(move |_| state.with(TaxonomyState::tree_variant));
    let tree_exporter = table_exporter("taxonomic-hierarchy", TAXONOMY_HIERARCHY);

    view! {
        <div class="grid grid--2">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Species Identification"</h3>
                    <p class="card__description">
                        "Upload images for automated species classification and taxonomic analysis"
                    </p>
                </div>
                <div class="dropzone">
                    <p>"Drop fish images here or click to browse"</p>
                    <button class="btn btn--outline">"Upload Images"</button>
                </div>
                <div class="form">
                    <label class="form__label" for="search">"Search by Name"</label>
                    <div class="row">
                        <input
                            id="search"
                            class="input"
                            placeholder="Enter species or common name..."
                            prop:value=move || state.with(|s| s.search_query.clone())
                            on:input=move |ev| state.update(|s| s.search_query = event_target_value(&ev))
                        />
                        <button class="btn">"Search"</button>
                    </div>
                    <label class="form__label">"Filter by Classification"</label>
                    <select
                        class="select"
                        on:change=move |ev| state.update(|s| s.set_classification_filter(&event_target_value(&ev)))
                    >
                        <option value="">"Select taxonomic level"</option>
                        {TaxonomyState::LEVEL_FILTERS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn btn--block" on:click=move |_| state.update(TaxonomyState::identify)>
                        "Identify Species"
                    </button>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Classification Results"</h3>
                    <p class="card__description">"AI-powered species identification"</p>
                </div>
                <div class="stack">
                    {TAXONOMY_HIERARCHY
                        .iter()
                        .map(|rank| {
                            view! {
                                <div class="row row--between">
                                    <div>
                                        <span class="muted">{rank.level}</span>
                                        <div class="taxon">{rank.value}</div>
                                    </div>
                                    <Badge variant=BadgeVariant::for_confidence(rank.confidence)>
                                        {format!("{}%", rank.confidence)}
                                    </Badge>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h4>"Identified Species"</h4>
                <div class="identified">
                    <div class="taxon">{IDENTIFIED_SPECIES}</div>
                    <div class="muted">{IDENTIFIED_COMMON_NAME}</div>
                    <div class="tag-row">
                        <Badge>"76% confidence"</Badge>
                        <Badge variant=BadgeVariant::Outline>"Mediterranean native"</Badge>
                    </div>
                </div>

                <div class="row row--between tree-access">
                    <span>"Taxonomic Tree Visualization"</span>
                    <button class="btn btn--outline btn--sm" on:click=move |_| state.update(TaxonomyState::toggle_tree)>
                        {move || if show_tree.get() { "Hide" } else { "View" }}
                    </button>
                </div>

                <div class="row">
                    <button
                        class="btn btn--grow"
                        class:btn--outline=move || variant.get() == TreeVariant::Preview
                        on:click=move |_| state.update(TaxonomyState::toggle_tree)
                    >
                        {move || state.with(TaxonomyState::tree_button_label)}
                    </button>
                    <button class="btn btn--outline" title="Show tree" on:click=move |_| state.update(TaxonomyState::reveal_tree)>
                        "Tree"
                    </button>
                    <ExportMenu label="Export" exporter=tree_exporter/>
                </div>

                <Show when=move || show_tree.get()>
                    <TaxonomicTree variant=Signal::derive(move || variant.get())/>
                </Show>
            </div>
        </div>

        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Recent Classifications"</h3>
                <p class="card__description">"History of species identifications"</p>
            </div>
            <div class="stack">
                {RECENT_CLASSIFICATIONS
                    .iter()
                    .map(|c| {
                        let status_variant = match c.status {
                            ReviewStatus::Verified => BadgeVariant::Default,
                            ReviewStatus::Pending => BadgeVariant::Outline,
                        };
                        view! {
                            <div class="list-item row row--between">
                                <div>
                                    <h4 class="taxon">{c.species}</h4>
                                    <p class="muted">{c.common_name}</p>
                                    <p class="muted">{format!("{} • {}", c.location, c.date)}</p>
                                </div>
                                <div class="row">
                                    <Badge variant=BadgeVariant::Secondary>{format!("{}%", c.confidence)}</Badge>
                                    <Badge variant=status_variant>{c.status.label()}</Badge>
                                    <button class="btn btn--ghost btn--sm">"View"</button>
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
fn TaxonomicTree(variant: Signal<TreeVariant>) -> impl IntoView {
    let exporter = table_exporter("phylogenetic-tree", TAXONOMY_HIERARCHY);
    let last = TAXONOMY_HIERARCHY.len().saturating_sub(1);

    view! {
        <div class="card tree">
            <div class="card__header row row--between">
                <div>
                    <h3 class="card__title">{move || variant.get().title()}</h3>
                    <p class="card__description">{move || variant.get().description()}</p>
                </div>
                <ExportMenu label="Export Tree" exporter=exporter/>
            </div>
            <h4>{format!("Phylogenetic Tree for {IDENTIFIED_SPECIES}")}</h4>
            <ol class="tree__levels">
                {TAXONOMY_HIERARCHY
                    .iter()
                    .enumerate()
                    .map(|(i, rank)| {
                        view! {
                            <li class="tree__level" style=format!("margin-left: {}rem;", i)>
                                <span class=tree_dot_class(rank.confidence)></span>
                                <span class="muted">{rank.level}</span>
                                <span class="taxon" class:taxon--leaf={i == last}>{rank.value}</span>
                                <Badge variant=BadgeVariant::for_confidence(rank.confidence)>
                                    {format!("{}%", rank.confidence)}
                                </Badge>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <div class="grid grid--4 tree__related">
                {RELATED_TAXA
                    .iter()
                    .map(|(taxon, common)| {
                        view! {
                            <div class="card card--compact">
                                <div class="taxon">{*taxon}</div>
                                <div class="muted">{*common}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn OtolithTab(state: RwSignal<TaxonomyState>) -> impl IntoView {
    let measurements_exporter = table_exporter("otolith-measurements", OTOLITH_MEASUREMENTS);
    let view_mode = move || state.with(|s| s.otolith_view);

    view! {
        <div class="grid grid--2">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Otolith Viewer"</h3>
                    <p class="card__description">"Interactive 2D/3D otolith analysis"</p>
                </div>
                <label class="form__label">"View Mode"</label>
                <select
                    class="select"
                    on:change=move |ev| state.update(|s| s.otolith_view = OtolithView::from_value(&event_target_value(&ev)))
                >
                    <option value=OtolithView::TwoD.value() selected=move || view_mode() == OtolithView::TwoD>
                        "2D View"
                    </option>
                    <option value=OtolithView::ThreeD.value() selected=move || view_mode() == OtolithView::ThreeD>
                        "3D Model"
                    </option>
                </select>
                <div class="otolith" class:otolith--3d=move || view_mode() == OtolithView::ThreeD>
                    <div class="otolith__tools">
                        <button class="btn btn--secondary btn--sm">"Zoom"</button>
                        <button class="btn btn--secondary btn--sm">"Reset"</button>
                        <button class="btn btn--secondary btn--sm">"Layers"</button>
                    </div>
                    <span class="otolith__caption">"E. marginatus"</span>
                </div>
                <div class="row">
                    <button class="btn btn--outline btn--grow">"Upload Otolith"</button>
                    <button class="btn btn--outline btn--grow">"Compare"</button>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Morphometric Analysis"</h3>
                    <p class="card__description">"Quantitative otolith measurements"</p>
                </div>
                <div class="stack">
                    {OTOLITH_MEASUREMENTS
                        .iter()
                        .map(|m| {
                            view! {
                                <div class="row row--between">
                                    <span>{m.parameter}</span>
                                    <div class="align-right">
                                        <div class="mono">{m.value}</div>
                                        <div class="muted">{format!("Range: {}", m.range)}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h4>"Shape Analysis"</h4>
                <div class="meta-grid">
                    {SHAPE_INDICES
                        .iter()
                        .map(|(name, value)| {
                            view! {
                                <span class="muted">{format!("{name}:")}</span>
                                <span class="mono">{format!("{value:.3}")}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <ExportMenu label="Export Measurements" exporter=measurements_exporter/>
            </div>
        </div>
    }
}

fn tree_dot_class(confidence: u8) -> &'static str {
    match confidence {
        91..=u8::MAX => "tree__dot tree__dot--high",
        81..=90 => "tree__dot tree__dot--medium",
        _ => "tree__dot tree__dot--low",
    }
}
