/// One aggregated output row: how often the two conventions disagreed at
/// `precision` decimal places over windows falling into the term range.
/// Only emitted with a positive sample count, so the error rate is
/// always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonBucket {
    precision: u32,
    min_term_days: i64,
    max_term_days: i64,
    mismatch_count: usize,
    sample_count: usize
}

impl ComparisonBucket {
    pub fn new(precision: u32,
               min_term_days: i64,
               max_term_days: i64,
               mismatch_count: usize,
               sample_count: usize) -> ComparisonBucket {
        ComparisonBucket {
            precision,
            min_term_days,
            max_term_days,
            mismatch_count,
            sample_count
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn min_term_days(&self) -> i64 {
        self.min_term_days
    }

    pub fn max_term_days(&self) -> i64 {
        self.max_term_days
    }

    pub fn mismatch_count(&self) -> usize {
        self.mismatch_count
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn error_rate(&self) -> f64 {
        (self.mismatch_count as f64) / (self.sample_count as f64)
    }
}
