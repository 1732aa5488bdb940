use thiserror::Error;

use crate::engine::comparisonbucket::ComparisonBucket;
use crate::engine::ratepair::RatePair;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error)
}

/// Consumer of a finished run. Formatting and destination policy live
/// behind this seam; the engine only hands over the raw pairs and the
/// aggregated summary rows.
pub trait ReportSink {
    fn write_pairs(&mut self, pairs: &[RatePair]) -> Result<(), ReportError>;

    fn write_summary(&mut self, summary: &[ComparisonBucket]) -> Result<(), ReportError>;
}
