//! End-to-end run over a synthetic five-date calendar whose index was
//! generated by the same compounding formula, driven through the file
//! data source and both report sinks.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use accrualrecon::configuration::ReconciliationConfig;
use accrualrecon::engine::comparisonengine::PairwiseComparisonEngine;
use accrualrecon::rate::ratecalculator::RateCalculator;
use accrualrecon::report::csvreportsink::CsvReportSink;
use accrualrecon::report::reportsink::ReportSink;
use accrualrecon::series::accrualseriesbuilder::AccrualSeriesBuilder;
use accrualrecon::series::ratedatasource::{
    JsonFileDataSource,
    RateDataSource
};
use accrualrecon::series::rateseries::SeriesKind;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("accrualrecon-it-{}-{}", std::process::id(), name));
    path
}

/// Mon 2023-01-02 .. Fri 2023-01-06 with overnight rates
/// [5.00, 5.01, 4.99, 5.00] (one fewer than dates) and index values
/// recomputed from the same daily factors, epoch 1.0 on the Monday.
fn write_input_files() -> (PathBuf, PathBuf) {
    let dates = [
        d(2023, 1, 2), d(2023, 1, 3), d(2023, 1, 4), d(2023, 1, 5), d(2023, 1, 6)
    ];
    let rates = [5.00_f64, 5.01, 4.99, 5.00];

    let overnight_rows: Vec<String> = dates[..4]
        .iter()
        .zip(rates.iter())
        .map(|(date, rate)| format!(r#"{{"date": "{date}", "value": {rate}}}"#))
        .collect();

    let mut level = 1.0_f64;
    let mut index_rows = Vec::new();
    for (position, date) in dates.iter().enumerate() {
        index_rows.push(format!(r#"{{"date": "{date}", "value": {level}}}"#));
        if position < rates.len() {
            level *= 1.0 + rates[position] / 36000.0;
        }
    }

    let overnight_path = temp_path("overnight.json");
    let index_path = temp_path("index.json");
    fs::write(&overnight_path, format!("[{}]", overnight_rows.join(","))).unwrap();
    fs::write(&index_path, format!("[{}]", index_rows.join(","))).unwrap();
    (overnight_path, index_path)
}

#[test]
fn self_consistent_inputs_reconcile_without_mismatches() {
    let (overnight_path, index_path) = write_input_files();
    let source = JsonFileDataSource::new(overnight_path.clone(), index_path.clone());
    let overnight = source
        .fetch_series(SeriesKind::OvernightRate, NaiveDate::MIN, NaiveDate::MAX)
        .unwrap();
    let index = source
        .fetch_series(SeriesKind::CompoundedIndex, NaiveDate::MIN, NaiveDate::MAX)
        .unwrap();
    let series = AccrualSeriesBuilder::build(&overnight, &index).unwrap();

    // the full-window rates agree before rounding even enters
    let compounded = RateCalculator::rate_compounded(&series, d(2023, 1, 2), d(2023, 1, 6))
        .unwrap();
    let indexed = RateCalculator::rate_indexed(&series, d(2023, 1, 2), d(2023, 1, 6))
        .unwrap();
    assert!((compounded - indexed).abs() < 1e-12);

    let config = ReconciliationConfig::new(d(2023, 1, 2), d(2023, 1, 6))
        .with_precisions(vec![3, 4, 5, 6]);
    let outcome = PairwiseComparisonEngine::new(config).run(&series);

    assert_eq!(outcome.pairs().len(), 10);
    assert!(!outcome.summary().is_empty());
    for row in outcome.summary() {
        assert_eq!(row.mismatch_count(), 0, "mismatch at precision {}", row.precision());
        assert!(row.sample_count() > 0);
    }

    // rows come out grouped by ascending precision
    let precisions: Vec<u32> = outcome.summary().iter().map(|r| r.precision()).collect();
    let mut sorted = precisions.clone();
    sorted.sort_unstable();
    assert_eq!(precisions, sorted);

    let pairs_path = temp_path("allresults.csv");
    let summary_path = temp_path("summary.csv");
    let mut sink = CsvReportSink::new(pairs_path.clone(), summary_path.clone());
    sink.write_pairs(outcome.pairs()).unwrap();
    sink.write_summary(outcome.summary()).unwrap();

    let pairs_csv = fs::read_to_string(&pairs_path).unwrap();
    assert_eq!(pairs_csv.lines().count(), 1 + outcome.pairs().len());
    let summary_csv = fs::read_to_string(&summary_path).unwrap();
    assert_eq!(summary_csv.lines().count(), 1 + outcome.summary().len());

    for path in [overnight_path, index_path, pairs_path, summary_path] {
        fs::remove_file(path).unwrap();
    }
}
