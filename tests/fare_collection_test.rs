//! End-to-end collection tests driven by a fake fare provider.

use serde_json::{json, Value};
use std::cell::Cell;
use std::fs;
use tempfile::tempdir;
use uberfare::record::TIMESTAMP_FIELD;
use uberfare::{
    Coordinates, CsvOutput, FareProvider, Output, Poller, PriceRecord, Result, DISPLAY_FIELDS,
    ESTIMATE_FIELDS,
};

/// Returns four fixed products and counts how often it was asked.
struct FakeProvider {
    calls: Cell<usize>,
}

impl FakeProvider {
    fn new() -> Self {
        FakeProvider {
            calls: Cell::new(0),
        }
    }
}

fn product(name: &str, id: &str, high: f64, low: f64, estimate: &str) -> PriceRecord {
    match json!({
        "localized_display_name": name,
        "distance": 5.15,
        "display_name": name,
        "product_id": id,
        "high_estimate": high,
        "low_estimate": low,
        "duration": 1020,
        "estimate": estimate,
        "currency_code": "PHP"
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

impl FareProvider for FakeProvider {
    fn price_estimates(&self, coordinates: &Coordinates) -> Result<Vec<PriceRecord>> {
        self.calls.set(self.calls.get() + 1);
        assert_eq!(coordinates.start_latitude, "12");
        assert_eq!(coordinates.end_longitude, "78");

        Ok(vec![
            product("uberX", "ID1-WWWW-XXXX-YYYY-ZZZZZZZZZZZZ", 250.0, 204.0, "PHP204-250"),
            product("uberPOOL", "ID2-WWWW-XXXX-YYYY-ZZZZZZZZZZZZ", 169.0, 136.0, "PHP136-168"),
            product("uberXL", "ID3-WWWW-XXXX-YYYY-ZZZZZZZZZZZZ", 376.0, 306.0, "PHP306-376"),
            product("uberBLACK", "ID4-WWWW-XXXX-YYYY-ZZZZZZZZZZZZ", 291.0, 237.0, "PHP237-291"),
        ])
    }
}

fn coordinates() -> Coordinates {
    Coordinates::parse("12,34", "56,78").unwrap()
}

#[test]
fn test_fare_estimate_to_csv_runs_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let mut poller = Poller::new(
        FakeProvider::new(),
        coordinates(),
        CsvOutput::new(&path, ESTIMATE_FIELDS),
        0,
    );
    poller.run().unwrap();

    let (provider, _) = poller.into_parts();
    assert_eq!(provider.calls.get(), 1);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), ESTIMATE_FIELDS.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);

    let names: Vec<&str> = rows.iter().map(|r| &r[2]).collect();
    assert_eq!(names, vec!["uberX", "uberPOOL", "uberXL", "uberBLACK"]);

    let timestamp = &rows[0][9];
    assert!(!timestamp.is_empty());
    assert!(rows.iter().all(|r| &r[9] == timestamp));
}

#[test]
fn test_second_run_appends_without_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    for _ in 0..2 {
        let mut poller = Poller::new(
            FakeProvider::new(),
            coordinates(),
            CsvOutput::new(&path, ESTIMATE_FIELDS),
            0,
        );
        poller.run().unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 9);
    assert_eq!(
        contents
            .lines()
            .filter(|l| l.starts_with("localized_display_name"))
            .count(),
        1
    );
}

#[test]
fn test_fare_estimate_to_table() {
    let output = Output::select(None, Vec::new(), ESTIMATE_FIELDS, DISPLAY_FIELDS);
    let mut poller = Poller::new(FakeProvider::new(), coordinates(), output, 0);
    poller.run().unwrap();

    let (provider, output) = poller.into_parts();
    assert_eq!(provider.calls.get(), 1);

    let table = match output {
        Output::Table(dumper) => String::from_utf8(dumper.into_inner()).unwrap(),
        Output::Csv(_) => panic!("expected table output"),
    };

    let header = table.lines().nth(1).unwrap();
    let columns: Vec<&str> = header
        .split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    assert_eq!(columns, DISPLAY_FIELDS.to_vec());

    assert!(!table.contains(TIMESTAMP_FIELD));
    assert!(!table.contains("ID1-WWWW"));
    let body: Vec<&str> = table.lines().skip(3).filter(|l| l.starts_with('|')).collect();
    assert_eq!(body.len(), 4);
    assert!(body[0].contains("uberX "));
    assert!(body[3].contains("uberBLACK"));
}
