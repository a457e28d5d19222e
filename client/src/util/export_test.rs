use serde::Serialize;

use super::*;
use crate::data::analysis::{AI_INSIGHTS, CORRELATION_DATA, MODEL_PERFORMANCE};
use crate::data::collaboration::{SHARED_REPORTS, TEAM_MEMBERS};
use crate::data::edna::{DETECTION_RESULTS, PROCESSING_STEPS, SEQUENCE_LIBRARY, TOP_MATCHES};
use crate::data::taxonomy::{OTOLITH_MEASUREMENTS, TAXONOMY_HIERARCHY};
use crate::data::visualization::{SPECIES_HOTSPOTS, TEMPERATURE_TIMELINE};

/// CSV starts with a header naming exactly the JSON object keys, and has one
/// line per row after it.
fn assert_named_columns<T: Serialize>(name: &str, rows: &[T]) {
    let csv = encode(rows, ExportFormat::Csv).unwrap();
    let json: serde_json::Value = serde_json::from_str(&encode(rows, ExportFormat::Json).unwrap()).unwrap();

    let first = json[0].as_object().unwrap_or_else(|| panic!("{name}: json rows must be objects"));
    let mut keys: Vec<_> = first.keys().map(String::as_str).collect();
    keys.sort_unstable();

    let header = csv.lines().next().unwrap();
    let mut columns: Vec<_> = header.split(',').collect();
    columns.sort_unstable();

    assert_eq!(columns, keys, "{name}: csv header");
    assert_eq!(csv.lines().count(), rows.len() + 1, "{name}: csv line count");
}

#[derive(Serialize)]
struct Row {
    name: &'static str,
    note: &'static str,
    value: f64,
}

#[test]
fn csv_has_header_and_quotes_fields_with_commas() {
    let rows = [
        Row { name: "pH", note: "normal", value: 8.1 },
        Row { name: "Nitrates", note: "high, rising", value: 15.3 },
    ];
    let csv = encode_csv(&rows).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "name,note,value");
    assert_eq!(lines[1], "pH,normal,8.1");
    assert_eq!(lines[2], "Nitrates,\"high, rising\",15.3");
}

#[test]
fn csv_of_taxonomy_hierarchy_has_one_line_per_rank() {
    let csv = encode(TAXONOMY_HIERARCHY, ExportFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), TAXONOMY_HIERARCHY.len() + 1);
    assert!(csv.starts_with("level,value,confidence\n"));
    assert!(csv.contains("Species,E. marginatus,76"));
}

#[test]
fn csv_renders_status_enums_as_lowercase_words() {
    let csv = encode(DETECTION_RESULTS, ExportFormat::Csv).unwrap();
    assert!(csv.contains("Thunnus thynnus,1247,High,confirmed"));
    assert!(csv.contains("Mullus barbatus,156,Low,tentative"));
}

#[test]
fn json_export_is_an_array_of_objects() {
    let json = encode(DETECTION_RESULTS, ExportFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(5));
    assert_eq!(parsed[0]["reads"], 1247);
    assert_eq!(parsed[3]["status"], "tentative");
}

#[test]
fn empty_tables_encode_without_error() {
    let rows: [Row; 0] = [];
    assert_eq!(encode_csv(&rows).unwrap(), "");
    assert_eq!(encode(&rows, ExportFormat::Json).unwrap(), "[]");
}

#[test]
fn pdf_is_unsupported() {
    let err = encode(TAXONOMY_HIERARCHY, ExportFormat::Pdf).unwrap_err();
    assert_eq!(err, ExportError::Unsupported(ExportFormat::Pdf));
    assert_eq!(err.to_string(), "PDF export is not supported");
}

#[test]
fn file_names_use_format_extension() {
    assert_eq!(file_name("taxonomic-tree", ExportFormat::Csv), "taxonomic-tree.csv");
    assert_eq!(file_name("detections", ExportFormat::Json), "detections.json");
}

#[test]
fn export_without_browser_reports_browser_error() {
    let err = export_table("tree", TAXONOMY_HIERARCHY, ExportFormat::Json).unwrap_err();
    assert!(matches!(err, ExportError::Browser(msg) if msg.contains("tree.json")));
}

#[test]
fn export_pdf_fails_before_touching_browser() {
    let err = export_table("tree", TAXONOMY_HIERARCHY, ExportFormat::Pdf).unwrap_err();
    assert_eq!(err, ExportError::Unsupported(ExportFormat::Pdf));
}

#[test]
fn every_exported_table_has_a_field_name_header() {
    assert_named_columns("blast-top-matches", TOP_MATCHES);
    assert_named_columns("processing-workflow", PROCESSING_STEPS);
    assert_named_columns("sequence-library", SEQUENCE_LIBRARY);
    assert_named_columns("species-detections", DETECTION_RESULTS);
    assert_named_columns("correlation-data", CORRELATION_DATA);
    assert_named_columns("ai-insights", AI_INSIGHTS);
    assert_named_columns("model-performance", MODEL_PERFORMANCE);
    assert_named_columns("biodiversity-hotspots", SPECIES_HOTSPOTS);
    assert_named_columns("temperature-timeline", TEMPERATURE_TIMELINE);
    assert_named_columns("team-members", TEAM_MEMBERS);
    assert_named_columns("shared-reports", SHARED_REPORTS);
    assert_named_columns("taxonomic-hierarchy", TAXONOMY_HIERARCHY);
    assert_named_columns("otolith-measurements", OTOLITH_MEASUREMENTS);
}

#[test]
fn blast_matches_export_with_named_columns() {
    let csv = encode(TOP_MATCHES, ExportFormat::Csv).unwrap();
    assert_eq!(csv.lines().next(), Some("species,common_name,identity"));
    assert!(csv.contains("Thunnus thynnus,Atlantic Bluefin Tuna,99.2"));

    let json: serde_json::Value = serde_json::from_str(&encode(PROCESSING_STEPS, ExportFormat::Json).unwrap()).unwrap();
    assert_eq!(json[2]["step"], "PCR Amplification");
    assert_eq!(json[2]["status"], "in-progress");
}

#[test]
fn object_url_outlives_the_click() {
    assert!(URL_REVOKE_DELAY_MS >= 100);
}
