use super::*;
use crate::data::taxonomy::OTOLITH_MEASUREMENTS;

#[test]
fn status_text_names_saved_file() {
    assert_eq!(status_text(&Ok("otolith.csv".to_owned())), "Saved otolith.csv");
}

#[test]
fn status_text_surfaces_unsupported_pdf() {
    let err = Err(ExportError::Unsupported(ExportFormat::Pdf));
    assert_eq!(status_text(&err), "PDF export is not supported");
}

#[test]
fn table_exporter_rejects_pdf_before_download() {
    let owner = Owner::new();
    owner.with(|| {
        let exporter = table_exporter("otolith-measurements", OTOLITH_MEASUREMENTS);
        assert_eq!(exporter.run(ExportFormat::Pdf), Err(ExportError::Unsupported(ExportFormat::Pdf)));
    });
}

#[test]
fn table_exporter_reports_missing_browser_outside_wasm() {
    let owner = Owner::new();
    owner.with(|| {
        let exporter = table_exporter("otolith-measurements", OTOLITH_MEASUREMENTS);
        let err = exporter.run(ExportFormat::Csv).unwrap_err();
        assert_eq!(err, ExportError::Browser("no browser to save otolith-measurements.csv".to_owned()));
    });
}
