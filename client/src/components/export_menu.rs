//! Dropdown offering CSV / JSON / PDF export of one static table.

use leptos::prelude::*;
use serde::Serialize;

use crate::util::export::{ExportError, ExportFormat, export_table};

#[cfg(test)]
#[path = "export_menu_test.rs"]
mod export_menu_test;

/// Encodes and downloads a table, returning the saved file name.
pub type Exporter = Callback<ExportFormat, Result<String, ExportError>>;

/// Exporter for a `&'static` data table.
pub fn table_exporter<T>(basename: &'static str, rows: &'static [T]) -> Exporter
where
    T: Serialize + Send + Sync + 'static,
{
    Callback::new(move |format| export_table(basename, rows, format))
}

/// Inline status line shown under the menu after an export attempt.
#[must_use]
pub fn status_text(result: &Result<String, ExportError>) -> String {
    match result {
        Ok(name) => format!("Saved {name}"),
        Err(err) => err.to_string(),
    }
}

#[component]
pub fn ExportMenu(#[prop(into)] label: String, exporter: Exporter) -> impl IntoView {
    let open = RwSignal::new(false);
    let status = RwSignal::new(None::<Result<String, ExportError>>);

    let on_toggle = move |_| open.update(|o| *o = !*o);
    let run = move |format: ExportFormat| {
        let result = exporter.run(format);
        if let Err(err) = &result {
            log::warn!("export failed: {err}");
        }
        status.set(Some(result));
        open.set(false);
    };

    view! {
        <div class="export-menu">
            <button class="btn btn--outline btn--sm" on:click=on_toggle>
                {label}
            </button>
            <Show when=move || open.get()>
                <div class="export-menu__items" role="menu">
                    {ExportFormat::ALL
                        .into_iter()
                        .map(|format| {
                            view! {
                                <button class="export-menu__item" role="menuitem" on:click=move |_| run(format)>
                                    {format.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
            {move || {
                status
                    .get()
                    .map(|result| {
                        view! {
                            <p class="export-menu__status" class:export-menu__status--error={result.is_err()}>
                                {status_text(&result)}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
