//! Data integration page: dataset upload form, metadata tagging, recent datasets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing entered here leaves the page. "Select Files" drives the simulated
//! upload task; the form fields only feed local state.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::progress_bar::ProgressBar;
use crate::data::datasets::{
    DETECTED_METADATA, DatasetStatus, METADATA_STANDARDS, QUALITY_ASSESSMENT, RECENT_DATASETS, SUGGESTED_TAGS,
};
use crate::state::integration::{DataKind, UploadForm, upload_button_label};
use crate::state::progress::{ProgressTask, UPLOAD_PROFILE};
use crate::util::ticker::{self, TickerHandle};

#[component]
pub fn DataIntegrationPage() -> impl IntoView {
    let form = RwSignal::new(UploadForm::default());
    let upload = RwSignal::new(ProgressTask::new(UPLOAD_PROFILE));
    let handle = TickerHandle::new();
    on_cleanup({
        let handle = handle.clone();
        move || handle.cancel()
    });

    let uploading = move || upload.with(ProgressTask::is_running);
    let percent = move || upload.with(ProgressTask::value);
    let on_select_files = move |_| {
        ticker::start(upload, &handle);
    };

    view! {
        <div class="page data-integration">
            <div class="page__header">
                <div>
                    <h1>"Data Integration Hub"</h1>
                    <p class="page__subtitle">"Upload, validate, and standardize oceanographic and biodiversity datasets"</p>
                </div>
            </div>

            <div class="grid grid--2">
                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Dataset Upload"</h3>
                        <p class="card__description">"Upload new datasets for analysis and integration"</p>
                    </div>
                    <div class="form">
                        <label class="form__label" for="dataset-name">"Dataset Name"</label>
                        <input
                            id="dataset-name"
                            class="input"
                            placeholder="Enter dataset name"
                            prop:value=move || form.with(|f| f.dataset_name.clone())
                            on:input=move |ev| form.update(|f| f.dataset_name = event_target_value(&ev))
                        />

                        <label class="form__label" for="data-type">"Data Type"</label>
                        <select
                            id="data-type"
                            class="select"
                            on:change=move |ev| form.update(|f| f.set_data_kind(&event_target_value(&ev)))
                        >
                            <option value="">"Select data type"</option>
                            {DataKind::ALL
                                .into_iter()
                                .map(|kind| view! { <option value=kind.value()>{kind.label()}</option> })
                                .collect_view()}
                        </select>

                        <label class="form__label" for="metadata-standard">"Metadata Standard"</label>
                        <select
                            id="metadata-standard"
                            class="select"
                            on:change=move |ev| form.update(|f| f.set_standard(&event_target_value(&ev)))
                        >
                            <option value="">"Select international standard"</option>
                            {METADATA_STANDARDS.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                        </select>

                        <label class="form__label" for="description">"Description"</label>
                        <textarea
                            id="description"
                            class="textarea"
                            rows="3"
                            placeholder="Describe the dataset, collection methods, and key parameters..."
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>

                        <div class="dropzone">
                            <p>"Drag and drop files here, or click to browse"</p>
                            <button class="btn btn--outline" on:click=on_select_files disabled=uploading>
                                {move || upload_button_label(uploading())}
                            </button>
                            <Show when=uploading>
                                <div class="dropzone__progress">
                                    <ProgressBar value=Signal::derive(move || f64::from(percent()))/>
                                    <p class="muted">{move || format!("{}% complete", percent())}</p>
                                </div>
                            </Show>
                        </div>
                        <button class="btn btn--block" disabled=uploading>
                            "Upload & Process Dataset"
                        </button>
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Automated Metadata Tagging"</h3>
                        <p class="card__description">"AI-powered metadata extraction and standardization"</p>
                    </div>
                    <div class="stack">
                        {DETECTED_METADATA
                            .iter()
                            .map(|(field, state)| {
                                view! {
                                    <div class="row row--between">
                                        <span>{*field}</span>
                                        <Badge variant=BadgeVariant::Secondary>{*state}</Badge>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <h4>"Suggested Tags"</h4>
                    <div class="tag-row">
                        {SUGGESTED_TAGS
                            .iter()
                            .map(|tag| view! { <Badge variant=BadgeVariant::Outline>{*tag}</Badge> })
                            .collect_view()}
                    </div>
                    <h4>"Quality Assessment"</h4>
                    <div class="stack">
                        {QUALITY_ASSESSMENT
                            .iter()
                            .map(|(dimension, score)| {
                                let score = *score;
                                view! {
                                    <div class="row row--between">
                                        <span>{*dimension}</span>
                                        <span>{format!("{score}%")}</span>
                                    </div>
                                    <ProgressBar value=Signal::derive(move || f64::from(score)) thin=true/>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Recent Datasets"</h3>
                    <p class="card__description">"Manage and monitor uploaded datasets"</p>
                </div>
                <div class="stack">
                    {RECENT_DATASETS
                        .iter()
                        .map(|dataset| {
                            let quality = dataset.quality;
                            let status_variant = match dataset.status {
                                DatasetStatus::Validated => BadgeVariant::Secondary,
                                DatasetStatus::Processing => BadgeVariant::Outline,
                            };
                            view! {
                                <div class="list-item">
                                    <div class="row row--between">
                                        <div>
                                            <h4>{dataset.name}</h4>
                                            <div class="meta-grid">
                                                <span>{format!("Type: {}", dataset.kind)}</span>
                                                <span>{format!("Format: {}", dataset.format)}</span>
                                                <span>{format!("Size: {}", dataset.size)}</span>
                                                <span>{format!("Quality: {quality}%")}</span>
                                            </div>
                                            <div class="tag-row">
                                                {dataset
                                                    .tags
                                                    .iter()
                                                    .map(|tag| view! { <Badge variant=BadgeVariant::Outline>{*tag}</Badge> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                        <div class="row">
                                            <Badge variant=status_variant>{dataset.status.label()}</Badge>
                                            <button class="btn btn--ghost btn--sm">"View Details"</button>
                                        </div>
                                    </div>
                                    <ProgressBar value=Signal::derive(move || f64::from(quality)) thin=true/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
