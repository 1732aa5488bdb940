use serde::{
    Serialize,
    Deserialize
};

use crate::math::round::round_half_even;

/// Calendar months mapped to business-day-equivalent counts under the
/// 253-business-days-per-year convention inherited with the term
/// definitions. Kept as data feeding the bucket ladder, never re-derived.
const BUSINESS_DAYS_PER_MONTH: f64 = 253.0 / 12.0;

/// Open upper bound for the long-end and all-terms buckets.
pub const MAX_TERM_DAYS: i64 = 9999;

/// A range of elapsed-day windows over which mismatch statistics are
/// aggregated. The lower bound is exclusive and the upper bound
/// inclusive; the asymmetry is a deliberate boundary policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermBucket {
    min_term_days: i64,
    max_term_days: i64
}

impl TermBucket {
    pub fn new(min_term_days: i64, max_term_days: i64) -> TermBucket {
        TermBucket { min_term_days, max_term_days }
    }

    pub fn min_term_days(&self) -> i64 {
        self.min_term_days
    }

    pub fn max_term_days(&self) -> i64 {
        self.max_term_days
    }

    /// `min < days_accrued < max`, or exactly `max`.
    pub fn contains(&self, days_accrued: i64) -> bool {
        ((days_accrued > self.min_term_days) && (days_accrued < self.max_term_days))
            || (days_accrued == self.max_term_days)
    }

    /// The all-terms bucket followed by a short-end `(0, tenor]` and a
    /// long-end `(tenor, max]` bucket per critical tenor, in tenor order.
    pub fn ladder_from_critical_tenors(tenor_months: &[u32],
                                       max_term_days: i64) -> Vec<TermBucket> {
        let mut buckets = vec![TermBucket::new(0, max_term_days)];
        for &months in tenor_months {
            let boundary =
                round_half_even((months as f64) * BUSINESS_DAYS_PER_MONTH, 0) as i64;
            buckets.push(TermBucket::new(0, boundary));
            buckets.push(TermBucket::new(boundary, max_term_days));
        }
        buckets
    }
}
