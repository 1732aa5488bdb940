
use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;

use tracing_subscriber::EnvFilter;

use accrualrecon::configuration::ReconciliationConfig;
use accrualrecon::engine::comparisonengine::PairwiseComparisonEngine;
use accrualrecon::report::consolereportsink::ConsoleReportSink;
use accrualrecon::report::csvreportsink::CsvReportSink;
use accrualrecon::report::reportsink::ReportSink;
use accrualrecon::series::accrualseriesbuilder::AccrualSeriesBuilder;
use accrualrecon::series::ratedatasource::{
    JsonFileDataSource,
    RateDataSource
};
use accrualrecon::series::rateseries::SeriesKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let config_path = PathBuf::from(args.next().unwrap_or_else(|| "config.json".to_owned()));
    let overnight_path = PathBuf::from(args.next().unwrap_or_else(|| "overnight.json".to_owned()));
    let index_path = PathBuf::from(args.next().unwrap_or_else(|| "index.json".to_owned()));

    let config = ReconciliationConfig::from_file(&config_path)?;
    let source = JsonFileDataSource::new(overnight_path, index_path);
    let overnight = source.fetch_series(SeriesKind::OvernightRate,
                                        NaiveDate::MIN,
                                        NaiveDate::MAX)?;
    let index = source.fetch_series(SeriesKind::CompoundedIndex,
                                    NaiveDate::MIN,
                                    NaiveDate::MAX)?;
    let series = AccrualSeriesBuilder::build(&overnight, &index)?;

    let engine = PairwiseComparisonEngine::new(config);
    let outcome = engine.run(&series);

    let mut csv_sink = CsvReportSink::new(PathBuf::from("allresults.csv"),
                                          PathBuf::from("summary.csv"));
    csv_sink.write_pairs(outcome.pairs())?;
    csv_sink.write_summary(outcome.summary())?;

    let mut console_sink = ConsoleReportSink::new();
    console_sink.write_summary(outcome.summary())?;
    Ok(())
}
