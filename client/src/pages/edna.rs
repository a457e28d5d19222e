//! Molecular & eDNA page: sequence upload and search, sample workflow,
//! detection results, reference databases.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Search Databases" and "Start Analysis" drive one shared sequence-search
//! task owned by the page, so the two tabs cannot run overlapping searches
//! and the progress survives switching between them.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::export_menu::{ExportMenu, table_exporter};
use crate::components::progress_bar::ProgressBar;
use crate::components::tab_bar::TabBar;
use crate::data::edna::{
    DETECTION_RESULTS, DetectionStatus, PROCESSING_STEPS, QUALITY_THRESHOLDS, REFERENCE_DATABASES, SEQUENCE_LIBRARY,
    StepStatus, TOP_MATCHES, WORKFLOW_PROGRESS, confirmed_count, relative_abundance, total_reads,
};
use crate::state::edna::{
    EdnaState, EdnaTab, GeneMarker, SELECTABLE_DATABASES, analysis_button_label, search_button_label,
};
use crate::state::progress::{ProgressTask, SEQUENCE_SEARCH_PROFILE};
use crate::util::format::{percent_one_decimal, thousands};
use crate::util::ticker::{self, TickerHandle};

#[cfg(test)]
#[path = "edna_test.rs"]
mod edna_test;

#[component]
pub fn EdnaPage() -> impl IntoView {
    let state = RwSignal::new(EdnaState::default());
    let search = RwSignal::new(ProgressTask::new(SEQUENCE_SEARCH_PROFILE));
    let handle = TickerHandle::new();
    on_cleanup({
        let handle = handle.clone();
        move || handle.cancel()
    });
    let start_search = Callback::new(move |()| {
        ticker::start(search, &handle);
    });
    let tab = Memo::new(move |_| state.with(|s| s.tab));

    view! {
        <div class="page edna">
            <div class="page__header">
                <div>
                    <h1>"Molecular & eDNA Analysis"</h1>
                    <p class="page__subtitle">"Environmental DNA sequencing and molecular species identification"</p>
                </div>
            </div>
            <TabBar
                active=Signal::derive(move || tab.get())
                on_select=Callback::new(move |t| state.update(|s| s.tab = t))
            />
            {move || match tab.get() {
                EdnaTab::Sequences => {
                    view! { <SequencesTab state=state search=search start_search=start_search/> }.into_any()
                }
                EdnaTab::Analysis => {
                    view! { <AnalysisTab state=state search=search start_search=start_search/> }.into_any()
                }
                EdnaTab::Detection => view! { <DetectionTab/> }.into_any(),
                EdnaTab::References => view! { <ReferencesTab/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SequencesTab(
    state: RwSignal<EdnaState>,
    search: RwSignal<ProgressTask>,
    start_search: Callback<()>,
) -> impl IntoView {
    let searching = move || search.with(ProgressTask::is_running);
    let matches_exporter = table_exporter("blast-top-matches", TOP_MATCHES);
    let library_exporter = table_exporter("sequence-library", SEQUENCE_LIBRARY);

    view! {
        <div class="grid grid--2">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Sequence Upload"</h3>
                    <p class="card__description">"Upload DNA sequences for species identification"</p>
                </div>
                <div class="form">
                    <label class="form__label" for="sequence-id">"Sequence ID"</label>
                    <input
                        id="sequence-id"
                        class="input"
                        placeholder="Enter unique sequence ID"
                        prop:value=move || state.with(|s| s.sequence_id.clone())
                        on:input=move |ev| state.update(|s| s.sequence_id = event_target_value(&ev))
                    />
                    <label class="form__label" for="gene-marker">"Gene Marker"</label>
                    <select
                        id="gene-marker"
                        class="select"
                        on:change=move |ev| state.update(|s| s.set_gene(&event_target_value(&ev)))
                    >
                        {GeneMarker::ALL
                            .into_iter()
                            .map(|gene| {
                                view! {
                                    <option value=gene.value() selected=move || state.with(|s| s.gene == gene)>
                                        {gene.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <label class="form__label" for="sequence-data">"DNA Sequence"</label>
                    <textarea
                        id="sequence-data"
                        class="textarea mono"
                        rows="6"
                        placeholder="Paste DNA sequence (FASTA format)..."
                        prop:value=move || state.with(|s| s.sequence_text.clone())
                        on:input=move |ev| state.update(|s| s.sequence_text = event_target_value(&ev))
                    ></textarea>
                    <div class="grid grid--2">
                        <div>
                            <label class="form__label" for="location">"Collection Location"</label>
                            <input
                                id="location"
                                class="input"
                                placeholder="Lat, Long or region"
                                prop:value=move || state.with(|s| s.location.clone())
                                on:input=move |ev| state.update(|s| s.location = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="form__label" for="date">"Collection Date"</label>
                            <input
                                id="date"
                                class="input"
                                type="date"
                                prop:value=move || state.with(|s| s.collection_date.clone())
                                on:input=move |ev| state.update(|s| s.collection_date = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <button class="btn btn--block">"Upload & Analyze Sequence"</button>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Sequence Search"</h3>
                    <p class="card__description">"Search against reference databases"</p>
                </div>
                <div class="callout">
                    <span class="callout__title">"BLAST Analysis"</span>
                    <p class="muted">"High-speed sequence alignment against comprehensive marine databases"</p>
                </div>
                <SearchProgress search=search caption="Analyzing sequence..."/>
                <label class="form__label">"Top Matches"</label>
                <div class="stack">
                    {TOP_MATCHES
                        .iter()
                        .enumerate()
                        .map(|(rank, hit)| {
                            view! {
                                <div class="list-item row row--between">
                                    <div>
                                        <div class="taxon">{hit.species}</div>
                                        <div class="muted">{hit.common_name}</div>
                                    </div>
                                    <Badge variant=match_variant(rank)>{format!("{}%", hit.identity)}</Badge>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="row">
                    <button class="btn btn--grow" on:click=move |_| start_search.run(()) disabled=searching>
                        {move || search_button_label(searching())}
                    </button>
                    <ExportMenu label="Export" exporter=matches_exporter/>
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card__header row row--between">
                <div>
                    <h3 class="card__title">"Sequence Library"</h3>
                    <p class="card__description">"Stored DNA sequences and analysis results"</p>
                </div>
                <ExportMenu label="Export Library" exporter=library_exporter/>
            </div>
            <div class="stack">
                {SEQUENCE_LIBRARY
                    .iter()
                    .map(|seq| {
                        view! {
                            <div class="list-item">
                                <div class="row row--between">
                                    <div class="row">
                                        <span class="mono chip">{seq.id}</span>
                                        <Badge variant=BadgeVariant::Outline>{seq.gene}</Badge>
                                    </div>
                                    <span class="muted mono">{seq.accession}</span>
                                </div>
                                <h4 class="taxon">{seq.species}</h4>
                                <p class="muted">{format!("{} • {}", seq.location, seq.date)}</p>
                                <div class="meta-grid">
                                    <span>{format!("Quality: {}%", seq.quality)}</span>
                                    <span>{format!("Similarity: {}%", seq.similarity)}</span>
                                    <span>{format!("Length: {} bp", seq.length)}</span>
                                </div>
                                <div class="row">
                                    <button class="btn btn--ghost btn--sm">"View"</button>
                                    <button class="btn btn--ghost btn--sm">"Download"</button>
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
fn AnalysisTab(
    state: RwSignal<EdnaState>,
    search: RwSignal<ProgressTask>,
    start_search: Callback<()>,
) -> impl IntoView {
    let searching = move || search.with(ProgressTask::is_running);
    let steps_exporter = table_exporter("processing-workflow", PROCESSING_STEPS);

    view! {
        <div class="grid grid--2">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"eDNA Sample Processing"</h3>
                    <p class="card__description">"Environmental sample analysis workflow"</p>
                </div>
                <div class="stack">
                    {PROCESSING_STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <div class="step row row--between">
                                    <div class="row">
                                        <span class="step__number" class:step__number--active={step.status == StepStatus::InProgress}>
                                            {i + 1}
                                        </span>
                                        <div>
                                            <div class="step__title">{step.step}</div>
                                            <div class="muted">{step.detail}</div>
                                        </div>
                                    </div>
                                    <Badge variant=step_variant(step.status)>{step.status.label()}</Badge>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <ProgressBar value=Signal::derive(move || f64::from(WORKFLOW_PROGRESS))/>
                <p class="muted">{format!("Overall progress: {WORKFLOW_PROGRESS}% complete")}</p>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Analysis Parameters"</h3>
                    <p class="card__description">"Configure sequencing and analysis settings"</p>
                </div>
                <label class="form__label">"Target Gene Regions"</label>
                <div class="grid grid--2">
                    {GeneMarker::TARGETS
                        .into_iter()
                        .map(|gene| {
                            view! {
                                <label class="checkbox-row">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.with(|s| s.target_genes.contains(&gene))
                                        on:change=move |_| {
                                            state.update(|s| {
                                                s.toggle_target_gene(gene);
                                            });
                                        }
                                    />
                                    <span>{gene.short_label()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>

                <label class="form__label">"Quality Thresholds"</label>
                <div class="meta-grid">
                    {QUALITY_THRESHOLDS
                        .iter()
                        .map(|(name, value)| {
                            view! {
                                <span class="muted">{format!("{name}:")}</span>
                                <span class="mono">{*value}</span>
                            }
                        })
                        .collect_view()}
                </div>

                <label class="form__label">"Database Selection"</label>
                <div class="stack">
                    {REFERENCE_DATABASES
                        .iter()
                        .take(SELECTABLE_DATABASES)
                        .map(|db| {
                            let name = db.name;
                            view! {
                                <label class="checkbox-row row--between">
                                    <span>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || state.with(|s| s.databases.contains(name))
                                            on:change=move |_| {
                                                state.update(|s| {
                                                    s.toggle_database(name);
                                                });
                                            }
                                        />
                                        {name}
                                    </span>
                                    <Badge variant=BadgeVariant::Outline>{db.sequences}</Badge>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>

                <SearchProgress search=search caption="Processing samples..."/>
                <div class="row">
                    <button class="btn btn--grow" on:click=move |_| start_search.run(()) disabled=searching>
                        {move || analysis_button_label(searching())}
                    </button>
                    <ExportMenu label="Export" exporter=steps_exporter/>
                </div>
            </div>
        </div>
    }
}

/// Percent readout and bar for the shared search task, shown while it runs.
#[component]
fn SearchProgress(search: RwSignal<ProgressTask>, caption: &'static str) -> impl IntoView {
    let running = move || search.with(ProgressTask::is_running);
    let percent = move || search.with(ProgressTask::value);
    view! {
        <Show when=running>
            <div class="stack">
                <div class="row row--between">
                    <span>{caption}</span>
                    <span>{move || format!("{}%", percent())}</span>
                </div>
                <ProgressBar value=Signal::derive(move || f64::from(percent()))/>
            </div>
        </Show>
    }
}

#[component]
fn DetectionTab() -> impl IntoView {
    let total = total_reads(DETECTION_RESULTS);
    let results_exporter = table_exporter("species-detections", DETECTION_RESULTS);

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Species Detection Results"</h3>
                <p class="card__description">"Environmental DNA species identification and abundance"</p>
            </div>
            <div class="grid grid--3 stat-row">
                <div class="stat">
                    <div class="stat__value">{DETECTION_RESULTS.len()}</div>
                    <div class="muted">"Species Detected"</div>
                </div>
                <div class="stat">
                    <div class="stat__value">{thousands(u64::from(total))}</div>
                    <div class="muted">"Total Reads"</div>
                </div>
                <div class="stat">
                    <div class="stat__value">{confirmed_count(DETECTION_RESULTS)}</div>
                    <div class="muted">"Confirmed Species"</div>
                </div>
            </div>
            <div class="stack">
                {DETECTION_RESULTS
                    .iter()
                    .map(|result| {
                        let share = relative_abundance(result.reads, total);
                        let status_variant = match result.status {
                            DetectionStatus::Confirmed => BadgeVariant::Default,
                            DetectionStatus::Tentative => BadgeVariant::Secondary,
                        };
                        view! {
                            <div class="list-item">
                                <div class="row row--between">
                                    <div>
                                        <h4 class="taxon">{result.species}</h4>
                                        <p class="muted">
                                            {format!("{} reads • {} abundance", thousands(u64::from(result.reads)), result.abundance)}
                                        </p>
                                    </div>
                                    <Badge variant=status_variant>{result.status.label()}</Badge>
                                </div>
                                <div class="row row--between muted">
                                    <span>"Relative abundance"</span>
                                    <span>{percent_one_decimal(share)}</span>
                                </div>
                                <ProgressBar value=Signal::derive(move || share) thin=true/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="row">
                <ExportMenu label="Export Results" exporter=results_exporter/>
                <button class="btn btn--outline">"Compare Samples"</button>
            </div>
        </div>
    }
}

#[component]
fn ReferencesTab() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Reference Databases"</h3>
                <p class="card__description">"Connected molecular databases and resources"</p>
            </div>
            <div class="stack">
                {REFERENCE_DATABASES
                    .iter()
                    .map(|db| {
                        let (variant, label) =
                            if db.active { (BadgeVariant::Default, "active") } else { (BadgeVariant::Outline, "inactive") };
                        view! {
                            <div class="list-item row row--between">
                                <div>
                                    <h4>{db.name}</h4>
                                    <p class="muted">{format!("{} sequences • {} coverage", db.sequences, db.coverage)}</p>
                                </div>
                                <Badge variant=variant>{label}</Badge>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn step_variant(status: StepStatus) -> BadgeVariant {
    match status {
        StepStatus::Complete => BadgeVariant::Default,
        StepStatus::InProgress => BadgeVariant::Secondary,
        StepStatus::Pending => BadgeVariant::Outline,
    }
}

/// Top BLAST hits are badged by rank: best default, runner-up secondary.
fn match_variant(rank: usize) -> BadgeVariant {
    match rank {
        0 => BadgeVariant::Default,
        1 => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    }
}
