use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;

use serde::Deserialize;
use thiserror::Error;

use crate::engine::termbucket::{
    TermBucket,
    MAX_TERM_DAYS
};

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error)
}

fn default_precisions() -> Vec<u32> {
    vec![3, 4, 5, 6]
}

fn default_term_buckets() -> Vec<TermBucket> {
    TermBucket::ladder_from_critical_tenors(&[1, 3, 6], MAX_TERM_DAYS)
}

/// Everything one reconciliation run is parameterized by. The window
/// bounds are required; precisions and buckets default to the standard
/// set (decimal precisions 3..6, critical tenors 1, 3 and 6 months).
/// No run state outlives the configuration passed in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReconciliationConfig {
    test_window_start: NaiveDate,
    test_window_end: NaiveDate,
    #[serde(default = "default_precisions")]
    precisions: Vec<u32>,
    #[serde(default = "default_term_buckets")]
    term_buckets: Vec<TermBucket>,
    #[serde(default)]
    compute_clean_indexed: bool
}

impl ReconciliationConfig {
    pub fn new(test_window_start: NaiveDate,
               test_window_end: NaiveDate) -> ReconciliationConfig {
        ReconciliationConfig {
            test_window_start,
            test_window_end,
            precisions: default_precisions(),
            term_buckets: default_term_buckets(),
            compute_clean_indexed: false
        }
    }

    pub fn with_precisions(mut self, precisions: Vec<u32>) -> ReconciliationConfig {
        self.precisions = precisions;
        self
    }

    pub fn with_term_buckets(mut self, term_buckets: Vec<TermBucket>) -> ReconciliationConfig {
        self.term_buckets = term_buckets;
        self
    }

    pub fn with_clean_indexed(mut self, compute_clean_indexed: bool) -> ReconciliationConfig {
        self.compute_clean_indexed = compute_clean_indexed;
        self
    }

    pub fn from_file(path: &Path) -> Result<ReconciliationConfig, ConfigurationError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn test_window_start(&self) -> NaiveDate {
        self.test_window_start
    }

    pub fn test_window_end(&self) -> NaiveDate {
        self.test_window_end
    }

    pub fn precisions(&self) -> &[u32] {
        &self.precisions
    }

    pub fn term_buckets(&self) -> &[TermBucket] {
        &self.term_buckets
    }

    pub fn compute_clean_indexed(&self) -> bool {
        self.compute_clean_indexed
    }
}
