//! Data integration upload form.
//!
//! The form is local only: fields are edited in place and nothing is sent
//! anywhere. Upload progress lives in a separate `ProgressTask` signal.

use crate::data::datasets::METADATA_STANDARDS;

#[cfg(test)]
#[path = "integration_test.rs"]
mod integration_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataKind {
    Structured,
    SemiStructured,
    Unstructured,
}

impl DataKind {
    pub const ALL: [DataKind; 3] = [DataKind::Structured, DataKind::SemiStructured, DataKind::Unstructured];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::SemiStructured => "semi-structured",
            Self::Unstructured => "unstructured",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Structured => "Structured (CSV, Database)",
            Self::SemiStructured => "Semi-structured (JSON, XML)",
            Self::Unstructured => "Unstructured (Images, Text)",
        }
    }

    #[must_use]
    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.value() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub dataset_name: String,
    pub data_kind: Option<DataKind>,
    pub standard: Option<&'static str>,
    pub description: String,
}

impl UploadForm {
    /// Unknown values clear the selection.
    pub fn set_data_kind(&mut self, raw: &str) {
        self.data_kind = DataKind::from_value(raw);
    }

    /// Only standards from the offered list are accepted.
    pub fn set_standard(&mut self, raw: &str) {
        self.standard = METADATA_STANDARDS.iter().copied().find(|s| *s == raw);
    }
}

/// Caption of the file picker button.
#[must_use]
pub fn upload_button_label(uploading: bool) -> &'static str {
    if uploading { "Uploading..." } else { "Select Files" }
}
