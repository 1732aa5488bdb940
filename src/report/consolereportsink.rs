use tracing::info;

use crate::engine::comparisonbucket::ComparisonBucket;
use crate::engine::ratepair::RatePair;
use crate::report::reportsink::{
    ReportError,
    ReportSink
};

/// Prints the aggregated summary as an aligned table. The raw pairs are
/// far too numerous for a terminal, so only their count is reported;
/// pair-level verification goes through `CsvReportSink`.
#[derive(Default)]
pub struct ConsoleReportSink;

impl ConsoleReportSink {
    pub fn new() -> ConsoleReportSink {
        ConsoleReportSink
    }
}

impl ReportSink for ConsoleReportSink {
    fn write_pairs(&mut self, pairs: &[RatePair]) -> Result<(), ReportError> {
        info!(pairs = pairs.len(), "accrual pairs computed");
        Ok(())
    }

    fn write_summary(&mut self, summary: &[ComparisonBucket]) -> Result<(), ReportError> {
        println!("{:>4} {:>8} {:>8} {:>8} {:>8} {:>8}",
                 "prec", "minterm", "maxterm", "errors", "samples", "errate");
        for row in summary {
            println!("{:>4} {:>8} {:>8} {:>8} {:>8} {:>7.2}%",
                     row.precision(),
                     row.min_term_days(),
                     row.max_term_days(),
                     row.mismatch_count(),
                     row.sample_count(),
                     row.error_rate() * 100.0);
        }
        Ok(())
    }
}
