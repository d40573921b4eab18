//! Integration tests for the split pipeline
//!
//! Exercises the planner, filter, assembler, and archive writer together,
//! covering the partition-union and bundling properties end to end.

use busplit::adapters::codec::{CsvCodec, TabularCodec, XlsxCodec};
use busplit::config::GroupConfig;
use busplit::core::planner::{plan_dynamic, plan_fixed};
use busplit::core::ExportAssembler;
use busplit::domain::{Blob, Bundle, BusplitError, Table};
use std::collections::HashSet;
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn billing_table() -> Table {
    Table::new(
        vec!["BU".to_string(), "Invoice".to_string()],
        vec![
            vec!["4158".to_string(), "INV-001".to_string()],
            vec!["4158".to_string(), "INV-002".to_string()],
            vec!["4341".to_string(), "INV-003".to_string()],
            vec!["9999".to_string(), "INV-004".to_string()],
        ],
    )
}

fn grouped() -> Vec<GroupConfig> {
    vec![
        GroupConfig {
            name: "BU_4158.csv".to_string(),
            units: vec!["4158".to_string()],
        },
        GroupConfig {
            name: "BU_4341.csv".to_string(),
            units: vec!["4341".to_string()],
        },
        GroupConfig {
            name: "BU_4359_4360.csv".to_string(),
            units: vec!["4359".to_string(), "4360".to_string()],
        },
    ]
}

fn decode_rows(codec: &dyn TabularCodec, blob: &Blob) -> Vec<Vec<String>> {
    codec.decode(&blob.bytes).unwrap().rows().to_vec()
}

#[test]
fn fixed_grouping_produces_only_non_empty_partitions() {
    let codec = CsvCodec::new();
    let assembler = ExportAssembler::new(&codec, "BU", "bu_export.zip");
    let specs = plan_fixed(&grouped()).unwrap();

    let bundle = assembler.assemble(&billing_table(), &specs, false).unwrap();
    let Bundle::Loose(blobs) = bundle else {
        panic!("expected loose bundle");
    };

    // BU_4359_4360 matched nothing, so exactly two blobs exist.
    assert_eq!(blobs.len(), 2);
    assert_eq!(decode_rows(&codec, &blobs[0]).len(), 2);
    assert_eq!(decode_rows(&codec, &blobs[1]).len(), 1);
}

#[test]
fn partition_union_equals_selected_rows() {
    let codec = CsvCodec::new();
    let assembler = ExportAssembler::new(&codec, "BU", "bu_export.zip");
    let specs = plan_fixed(&grouped()).unwrap();

    let bundle = assembler.assemble(&billing_table(), &specs, false).unwrap();

    let mut exported: Vec<Vec<String>> = Vec::new();
    for blob in bundle.blobs() {
        exported.extend(decode_rows(&codec, blob));
    }

    // Union of all outputs = rows whose BU is in some selector set;
    // the 9999 row appears nowhere.
    let selected: HashSet<&str> = ["4158", "4341", "4359", "4360"].into();
    let expected: Vec<Vec<String>> = billing_table()
        .rows()
        .iter()
        .filter(|row| selected.contains(row[0].as_str()))
        .cloned()
        .collect();

    assert_eq!(exported.len(), expected.len());
    for row in &expected {
        assert!(exported.contains(row));
    }
    assert!(exported.iter().all(|row| row[0] != "9999"));
}

#[test]
fn missing_key_column_fails_before_any_output() {
    let table = Table::new(
        vec!["Dept".to_string()],
        vec![vec!["4158".to_string()]],
    );
    let codec = CsvCodec::new();
    let assembler = ExportAssembler::new(&codec, "BU", "bu_export.zip");
    let specs = plan_fixed(&grouped()).unwrap();

    let err = assembler.assemble(&table, &specs, false).unwrap_err();
    assert!(matches!(err, BusplitError::Schema(_)));
}

#[test]
fn bundled_and_loose_exports_carry_the_same_content() {
    let codec = CsvCodec::new();
    let assembler = ExportAssembler::new(&codec, "BU", "bu_export.zip");
    let specs = plan_dynamic(
        &["4158".to_string(), "4341".to_string()],
        "BU",
        "csv",
    )
    .unwrap();

    let loose = assembler.assemble(&billing_table(), &specs, false).unwrap();
    let bundled = assembler.assemble(&billing_table(), &specs, true).unwrap();

    let Bundle::Loose(loose_blobs) = loose else {
        panic!("expected loose bundle");
    };
    let Bundle::Archive(archive) = bundled else {
        panic!("expected archive bundle");
    };
    assert_eq!(archive.name, "bu_export.zip");

    let mut zip = ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
    assert_eq!(zip.len(), loose_blobs.len());

    for blob in &loose_blobs {
        let mut member = zip.by_name(&blob.name).unwrap();
        let mut content = Vec::new();
        member.read_to_end(&mut content).unwrap();
        assert_eq!(content, blob.bytes);
    }
}

#[test]
fn assembly_is_byte_identical_across_runs() {
    let codec = CsvCodec::new();
    let assembler = ExportAssembler::new(&codec, "BU", "bu_export.zip");
    let specs = plan_fixed(&grouped()).unwrap();

    let first = assembler.assemble(&billing_table(), &specs, true).unwrap();
    let second = assembler.assemble(&billing_table(), &specs, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn xlsx_pipeline_round_trips_through_the_header_offset() {
    // Build an input workbook shaped like the real reports: one title row,
    // then the header, then data.
    let padded = Table::new(
        vec!["Billing Report March".to_string(), String::new()],
        vec![
            vec!["BU".to_string(), "Invoice".to_string()],
            vec!["4158".to_string(), "INV-001".to_string()],
            vec!["4341".to_string(), "INV-003".to_string()],
        ],
    );
    let input_bytes = XlsxCodec::new(0).encode(&padded).unwrap();

    let reader = XlsxCodec::new(1);
    let table = reader.decode(&input_bytes).unwrap();
    assert_eq!(table.columns(), ["BU", "Invoice"]);

    // Outputs are written with the header at row 0.
    let writer = XlsxCodec::new(0);
    let assembler = ExportAssembler::new(&writer, "BU", "bu_export.zip");
    let specs = plan_dynamic(&["4158".to_string()], "BU", "xlsx").unwrap();

    let bundle = assembler.assemble(&table, &specs, false).unwrap();
    let Bundle::Loose(blobs) = bundle else {
        panic!("expected loose bundle");
    };
    assert_eq!(blobs.len(), 1);
    assert_eq!(blobs[0].name, "BU_4158.xlsx");

    let exported = writer.decode(&blobs[0].bytes).unwrap();
    assert_eq!(exported.row_count(), 1);
    assert_eq!(exported.rows()[0], vec!["4158", "INV-001"]);
}
