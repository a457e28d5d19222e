use super::*;

#[test]
fn form_starts_empty() {
    let form = UploadForm::default();
    assert!(form.dataset_name.is_empty());
    assert_eq!(form.data_kind, None);
    assert_eq!(form.standard, None);
}

#[test]
fn data_kind_accepts_known_values_and_clears_on_unknown() {
    let mut form = UploadForm::default();
    form.set_data_kind("semi-structured");
    assert_eq!(form.data_kind, Some(DataKind::SemiStructured));
    form.set_data_kind("binary");
    assert_eq!(form.data_kind, None);
}

#[test]
fn standard_must_come_from_offered_list() {
    let mut form = UploadForm::default();
    form.set_standard(METADATA_STANDARDS[3]);
    assert_eq!(form.standard, Some("Darwin Core - Biodiversity Data Standard"));
    form.set_standard("ISO 19115");
    assert_eq!(form.standard, None);
}

#[test]
fn button_label_follows_upload_state() {
    assert_eq!(upload_button_label(false), "Select Files");
    assert_eq!(upload_button_label(true), "Uploading...");
}
