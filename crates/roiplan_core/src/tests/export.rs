//! CSV export tests

use crate::evaluate::compute;
use crate::export::{to_csv, write_csv};
use crate::model::{FIELD_NAMES, InputField, RoiScenario};

#[test]
fn test_csv_has_header_and_one_row() {
    let result = compute(&RoiScenario::default());
    let csv = to_csv(&result).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].split(',').count(), FIELD_NAMES.len());
    assert!(lines[0].starts_with("Baseline cost,New cost,Savings,Platform cost,"));
    assert!(lines[0].ends_with("Throughput multiplier (1+prod)"));
    assert!(lines[1].starts_with("5000000,"));
    assert!(lines[1].ends_with(",1.25"));
}

#[test]
fn test_csv_parses_back_to_field_map() {
    let result = compute(&RoiScenario::default());
    let csv = to_csv(&result).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), FIELD_NAMES.to_vec());

    let row = reader.records().next().unwrap().unwrap();
    for ((name, expected), cell) in result.fields().iter().zip(row.iter()) {
        let parsed: f64 = cell.parse().unwrap();
        assert_eq!(parsed, *expected, "{name}");
    }
}

#[test]
fn test_write_csv_matches_to_csv() {
    let result = compute(&RoiScenario::default().with_platform_cost(0.0));
    let mut buf = Vec::new();
    write_csv(&result, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), to_csv(&result).unwrap());
}

#[test]
fn test_stepped_inputs_export_clean_values() {
    let mut scenario = RoiScenario {
        labor_share: 0.30,
        ..RoiScenario::default()
    };
    for _ in 0..5 {
        scenario = InputField::LaborShare.nudge(scenario, 1);
    }
    scenario = InputField::ManpowerReduction.nudge(scenario, 3);

    let csv = to_csv(&compute(&scenario)).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let row = reader.records().next().unwrap().unwrap();

    assert_eq!(&row[6], "0.35");
    assert_eq!(&row[7], "0.23");
}
