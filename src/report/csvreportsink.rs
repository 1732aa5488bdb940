use std::path::PathBuf;

use tracing::info;

use crate::engine::comparisonbucket::ComparisonBucket;
use crate::engine::ratepair::RatePair;
use crate::report::reportsink::{
    ReportError,
    ReportSink
};

/// Writes the raw, unrounded per-pair rates and the aggregated summary
/// to two CSV files, for verification in a spreadsheet.
pub struct CsvReportSink {
    pairs_path: PathBuf,
    summary_path: PathBuf
}

impl CsvReportSink {
    pub fn new(pairs_path: PathBuf, summary_path: PathBuf) -> CsvReportSink {
        CsvReportSink { pairs_path, summary_path }
    }
}

impl ReportSink for CsvReportSink {
    fn write_pairs(&mut self, pairs: &[RatePair]) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_path(&self.pairs_path)?;
        writer.write_record([
            "d0", "d1", "daysaccr", "compounded", "indexed", "cleanindexed"
        ])?;
        for pair in pairs {
            writer.write_record([
                pair.d0().to_string(),
                pair.d1().to_string(),
                pair.days_accrued().to_string(),
                pair.rate_compounded().to_string(),
                pair.rate_indexed().to_string(),
                pair.rate_clean_indexed()
                    .map(|rate| rate.to_string())
                    .unwrap_or_default()
            ])?;
        }
        writer.flush()?;
        info!(pairs = pairs.len(), path = %self.pairs_path.display(),
              "wrote raw accrual results");
        Ok(())
    }

    fn write_summary(&mut self, summary: &[ComparisonBucket]) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_path(&self.summary_path)?;
        writer.write_record([
            "prec", "minterm", "maxterm", "errors", "samples", "errate"
        ])?;
        for row in summary {
            writer.write_record([
                row.precision().to_string(),
                row.min_term_days().to_string(),
                row.max_term_days().to_string(),
                row.mismatch_count().to_string(),
                row.sample_count().to_string(),
                row.error_rate().to_string()
            ])?;
        }
        writer.flush()?;
        info!(rows = summary.len(), path = %self.summary_path.display(),
              "wrote comparison summary");
        Ok(())
    }
}
