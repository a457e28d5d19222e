//! Table export: CSV/JSON encoding and browser download.
//!
//! SYSTEM CONTEXT
//! ==============
//! Export menus hand a static table to [`export_table`], which encodes it and
//! triggers a download through a temporary object URL. PDF is offered in the
//! menus for parity with the report tooling but has no encoder.

use serde::Serialize;

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Pdf];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "Export as CSV",
            Self::Json => "Export as JSON",
            Self::Pdf => "Export as PDF",
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Pdf => "pdf",
        }
    }

    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
            Self::Pdf => "application/pdf",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("{} export is not supported", .0.extension().to_uppercase())]
    Unsupported(ExportFormat),
    #[error("failed to encode export: {0}")]
    Encode(String),
    #[error("browser download failed: {0}")]
    Browser(String),
}

/// Encode `rows` in `format`.
pub fn encode<T: Serialize>(rows: &[T], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => encode_csv(rows),
        ExportFormat::Json => serde_json::to_string_pretty(rows).map_err(|e| ExportError::Encode(e.to_string())),
        ExportFormat::Pdf => Err(ExportError::Unsupported(format)),
    }
}

/// CSV with a header row taken from struct field names.
pub fn encode_csv<T: Serialize>(rows: &[T]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(|e| ExportError::Encode(e.to_string()))?;
    }
    let bytes = writer.into_inner().map_err(|e| ExportError::Encode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Encode(e.to_string()))
}

#[must_use]
pub fn file_name(basename: &str, format: ExportFormat) -> String {
    format!("{basename}.{}", format.extension())
}

/// Encode `rows` and download them as `<basename>.<ext>`. Returns the file name.
pub fn export_table<T: Serialize>(basename: &str, rows: &[T], format: ExportFormat) -> Result<String, ExportError> {
    let body = encode(rows, format)?;
    let name = file_name(basename, format);
    download(&name, format.mime(), &body)?;
    log::info!("exported {} rows to {name}", rows.len());
    Ok(name)
}

/// Delay before the download's object URL is released.
pub const URL_REVOKE_DELAY_MS: u32 = 1_000;

#[cfg(feature = "hydrate")]
fn download(file_name: &str, mime: &str, body: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    fn js_err(err: wasm_bindgen::JsValue) -> ExportError {
        ExportError::Browser(format!("{err:?}"))
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Browser("no document".to_owned()))?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(body));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Browser("anchor element unavailable".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // Some browsers start the download after `click` returns.
    gloo_timers::callback::Timeout::new(URL_REVOKE_DELAY_MS, move || {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("revoking export url failed: {err:?}");
        }
    })
    .forget();
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
fn download(file_name: &str, _mime: &str, _body: &str) -> Result<(), ExportError> {
    Err(ExportError::Browser(format!("no browser to save {file_name}")))
}
