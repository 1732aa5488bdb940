use chrono::NaiveDate;

use tracing::{
    debug,
    info,
    warn
};

use crate::configuration::ReconciliationConfig;
use crate::engine::comparisonbucket::ComparisonBucket;
use crate::engine::ratepair::RatePair;
use crate::engine::termbucket::TermBucket;
use crate::math::round::round_half_even;
use crate::rate::ratecalculator::{
    RateCalculator,
    RateError
};
use crate::series::accrualseries::AccrualSeries;

/// Everything one run produces: the raw per-pair rates (for verification
/// output) and the aggregated summary rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOutcome {
    pairs: Vec<RatePair>,
    summary: Vec<ComparisonBucket>
}

impl ComparisonOutcome {
    pub fn pairs(&self) -> &[RatePair] {
        &self.pairs
    }

    pub fn summary(&self) -> &[ComparisonBucket] {
        &self.summary
    }
}

/// Exhaustively enumerates every ordered date pair inside the test
/// window, computes both accrual rates per pair, and aggregates rounded
/// agreement counts per precision and term bucket.
///
/// Pair evaluation reads only the immutable series; the aggregation is a
/// fold into `BucketAccumulator`, whose merge is commutative and
/// associative. Sharding the outer pair loop and merging the
/// accumulators is therefore enough to parallelize a run, with no other
/// synchronization.
pub struct PairwiseComparisonEngine {
    config: ReconciliationConfig
}

impl PairwiseComparisonEngine {
    pub fn new(config: ReconciliationConfig) -> PairwiseComparisonEngine {
        PairwiseComparisonEngine { config }
    }

    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }

    pub fn run(&self, series: &AccrualSeries) -> ComparisonOutcome {
        let test_dates = series
            .calendar()
            .slice(self.config.test_window_start(), self.config.test_window_end());
        info!(test_dates = test_dates.len(),
              window_start = %self.config.test_window_start(),
              window_end = %self.config.test_window_end(),
              "enumerating accrual windows");
        self.warn_on_partial_coverage(series, test_dates.len());

        let mut pairs = Vec::new();
        let mut skipped = 0_usize;
        for (i, &d0) in test_dates.iter().enumerate() {
            for &d1 in &test_dates[(i + 1)..] {
                match self.evaluate_pair(series, d0, d1) {
                    Ok(pair) => pairs.push(pair),
                    Err(RateError::DateNotFound(_)) => {
                        // probing past a series' coverage boundary is
                        // expected under exhaustive pairing; never
                        // substitute a default rate
                        skipped += 1;
                        debug!(%d0, %d1, "skipped pair outside series coverage");
                    },
                    Err(error @ RateError::NonPositiveWindow { .. }) => {
                        unreachable!("ordered pairing guarantees d0 < d1: {error}")
                    }
                }
            }
        }
        info!(pairs = pairs.len(), skipped, "pairwise evaluation complete");

        let accumulator = pairs.iter().fold(
            BucketAccumulator::new(self.config.precisions().to_vec(),
                                   self.config.term_buckets().to_vec()),
            |accumulator, pair| accumulator.observe(pair)
        );
        ComparisonOutcome { pairs, summary: accumulator.into_rows() }
    }

    fn evaluate_pair(&self,
                     series: &AccrualSeries,
                     d0: NaiveDate,
                     d1: NaiveDate) -> Result<RatePair, RateError> {
        let rate_compounded = RateCalculator::rate_compounded(series, d0, d1)?;
        let rate_indexed = RateCalculator::rate_indexed(series, d0, d1)?;
        let rate_clean_indexed = if self.config.compute_clean_indexed() {
            Some(RateCalculator::rate_clean_indexed(series, d0, d1)?)
        } else {
            None
        };
        Ok(RatePair::new(d0,
                         d1,
                         (d1 - d0).num_days(),
                         rate_compounded,
                         rate_indexed,
                         rate_clean_indexed))
    }

    fn warn_on_partial_coverage(&self, series: &AccrualSeries, test_dates: usize) {
        let index_dates = series
            .observations()
            .iter()
            .filter(|o| o.index_value().is_some())
            .count();
        if index_dates > test_dates {
            warn!(omitted = index_dates - test_dates,
                  "test window omits part of the index coverage; widen the \
                   window bounds for the complete set of accruals");
        }
    }
}

/// Mismatch counters per `(precision, bucket)` combination. `observe`
/// folds one pair in; `merge` combines two accumulators and commutes, so
/// partial accumulators from sharded pair ranges reduce to the same
/// rows.
struct BucketAccumulator {
    precisions: Vec<u32>,
    buckets: Vec<TermBucket>,
    samples: Vec<usize>,
    mismatches: Vec<Vec<usize>>
}

impl BucketAccumulator {
    fn new(precisions: Vec<u32>, buckets: Vec<TermBucket>) -> BucketAccumulator {
        let samples = vec![0; buckets.len()];
        let mismatches = vec![vec![0; buckets.len()]; precisions.len()];
        BucketAccumulator { precisions, buckets, samples, mismatches }
    }

    fn observe(mut self, pair: &RatePair) -> BucketAccumulator {
        let disagrees: Vec<bool> = self.precisions
            .iter()
            .map(|&precision| {
                round_half_even(pair.rate_compounded(), precision)
                    != round_half_even(pair.rate_indexed(), precision)
            })
            .collect();
        for (bucket_index, bucket) in self.buckets.iter().enumerate() {
            if !bucket.contains(pair.days_accrued()) {
                continue;
            }
            self.samples[bucket_index] += 1;
            for (precision_index, &disagree) in disagrees.iter().enumerate() {
                if disagree {
                    self.mismatches[precision_index][bucket_index] += 1;
                }
            }
        }
        self
    }

    #[allow(dead_code)] // parallel-reduction seam, exercised in tests
    fn merge(mut self, other: BucketAccumulator) -> BucketAccumulator {
        debug_assert_eq!(self.precisions, other.precisions);
        debug_assert_eq!(self.buckets, other.buckets);
        for (bucket_index, count) in other.samples.into_iter().enumerate() {
            self.samples[bucket_index] += count;
        }
        for (precision_index, row) in other.mismatches.into_iter().enumerate() {
            for (bucket_index, count) in row.into_iter().enumerate() {
                self.mismatches[precision_index][bucket_index] += count;
            }
        }
        self
    }

    /// Emits rows grouped by precision ascending, buckets in definition
    /// order, omitting every combination without samples.
    fn into_rows(self) -> Vec<ComparisonBucket> {
        let mut precision_order: Vec<usize> = (0..self.precisions.len()).collect();
        precision_order.sort_by_key(|&index| self.precisions[index]);

        let mut rows = Vec::new();
        for precision_index in precision_order {
            for (bucket_index, bucket) in self.buckets.iter().enumerate() {
                let sample_count = self.samples[bucket_index];
                if sample_count == 0 {
                    continue;
                }
                rows.push(ComparisonBucket::new(
                    self.precisions[precision_index],
                    bucket.min_term_days(),
                    bucket.max_term_days(),
                    self.mismatches[precision_index][bucket_index],
                    sample_count
                ));
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use chrono::{
        Datelike,
        Days,
        Weekday
    };

    use crate::series::accrualseriesbuilder::AccrualSeriesBuilder;
    use crate::series::rateseries::RateSeries;

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn next_weekday(day: NaiveDate) -> NaiveDate {
        let mut next = day + Days::new(1);
        while matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
            next = next + Days::new(1);
        }
        next
    }

    /// Weekday calendar from 2023-01-02 with the index regenerated from
    /// the overnight factors, so both conventions agree exactly.
    fn self_consistent_series(rates: &[f64]) -> AccrualSeries {
        let mut date = d(2023, 1, 2);
        let mut dates = Vec::new();
        for _ in 0..=rates.len() {
            dates.push(date);
            date = next_weekday(date);
        }

        let overnight = RateSeries::from_observations(
            dates.iter().copied().zip(rates.iter().copied()).collect()
        );
        let mut index = RateSeries::new();
        let mut level = 1.0_f64;
        for (position, &day) in dates.iter().enumerate() {
            index.insert(day, level);
            if position < rates.len() {
                let elapsed = (dates[position + 1] - day).num_days() as f64;
                level *= 1.0 + rates[position] * elapsed / 36000.0;
            }
        }
        AccrualSeriesBuilder::build(&overnight, &index).unwrap()
    }

    fn full_window(series: &AccrualSeries) -> ReconciliationConfig {
        ReconciliationConfig::new(series.calendar().first_date().unwrap(),
                                  series.calendar().last_date().unwrap())
    }

    #[test]
    fn self_consistent_data_yields_zero_mismatches() {
        let series = self_consistent_series(&[5.00, 5.01, 4.99, 5.00]);
        let engine = PairwiseComparisonEngine::new(
            full_window(&series).with_precisions(vec![6])
        );
        let outcome = engine.run(&series);

        // 5 test dates -> 10 ordered pairs, none skipped
        assert_eq!(outcome.pairs().len(), 10);
        assert!(!outcome.summary().is_empty());
        for row in outcome.summary() {
            assert_eq!(row.mismatch_count(), 0);
            assert_eq!(row.error_rate(), 0.0);
        }
    }

    #[test]
    fn bucket_upper_bound_is_inclusive_and_lower_exclusive() {
        // Mon..Fri: days_accrued histogram is {1: 4, 2: 3, 3: 2, 4: 1}
        let series = self_consistent_series(&[5.00, 5.01, 4.99, 5.00]);
        let engine = PairwiseComparisonEngine::new(
            full_window(&series)
                .with_precisions(vec![6])
                .with_term_buckets(vec![TermBucket::new(1, 3)])
        );
        let outcome = engine.run(&series);

        // windows of exactly 3 days count, windows of exactly 1 day do not
        assert_eq!(outcome.summary().len(), 1);
        assert_eq!(outcome.summary()[0].sample_count(), 5);
    }

    #[test]
    fn empty_buckets_are_omitted_and_precisions_sorted() {
        let series = self_consistent_series(&[5.00, 5.01, 4.99, 5.00]);
        let engine = PairwiseComparisonEngine::new(
            full_window(&series)
                .with_precisions(vec![5, 3])
                .with_term_buckets(vec![
                    TermBucket::new(100, 200),
                    TermBucket::new(0, 9999)
                ])
        );
        let outcome = engine.run(&series);

        // the (100, 200] bucket never matches and produces no row at all
        assert_eq!(outcome.summary().len(), 2);
        assert_eq!(outcome.summary()[0].precision(), 3);
        assert_eq!(outcome.summary()[1].precision(), 5);
        for row in outcome.summary() {
            assert_eq!((row.min_term_days(), row.max_term_days()), (0, 9999));
            assert_eq!(row.sample_count(), 10);
        }
    }

    #[test]
    fn pairs_outside_index_coverage_are_skipped_not_fatal() {
        let overnight = RateSeries::from_observations(vec![
            (d(2023, 1, 2), 5.00),
            (d(2023, 1, 3), 5.01),
            (d(2023, 1, 4), 4.99),
            (d(2023, 1, 5), 5.00)
        ]);
        let index = RateSeries::from_observations(vec![
            (d(2023, 1, 4), 1.0),
            (d(2023, 1, 5), 1.0 + 4.99 / 36000.0)
        ]);
        let series = AccrualSeriesBuilder::build(&overnight, &index).unwrap();
        let engine = PairwiseComparisonEngine::new(
            ReconciliationConfig::new(d(2023, 1, 2), d(2023, 1, 5))
        );
        let outcome = engine.run(&series);

        // of the 6 candidate pairs only (Jan 4, Jan 5) has index cover
        assert_eq!(outcome.pairs().len(), 1);
        assert_eq!(outcome.pairs()[0].d0(), d(2023, 1, 4));
        assert_eq!(outcome.pairs()[0].days_accrued(), 1);
        for row in outcome.summary() {
            assert_eq!(row.sample_count(), 1);
            assert_eq!(row.mismatch_count(), 0);
        }
    }

    #[test]
    fn clean_indexed_rates_appear_when_configured() {
        let series = self_consistent_series(&[5.00, 5.01, 4.99]);
        let engine = PairwiseComparisonEngine::new(
            full_window(&series).with_clean_indexed(true)
        );
        let outcome = engine.run(&series);
        assert!(!outcome.pairs().is_empty());
        assert!(outcome.pairs().iter().all(|p| p.rate_clean_indexed().is_some()));
    }

    #[test]
    fn sharded_accumulators_merge_to_the_sequential_rows() {
        let series = self_consistent_series(&[5.00, 5.01, 4.99, 5.00]);
        let engine = PairwiseComparisonEngine::new(full_window(&series));
        let pairs = engine.run(&series).pairs().to_vec();
        let fresh = || BucketAccumulator::new(vec![3, 4, 5, 6],
                                              TermBucket::ladder_from_critical_tenors(
                                                  &[1, 3, 6], 9999));

        let sequential = pairs.iter().fold(fresh(), |acc, p| acc.observe(p));
        let (left, right) = pairs.split_at(pairs.len() / 2);
        let merged = left.iter().fold(fresh(), |acc, p| acc.observe(p))
            .merge(right.iter().fold(fresh(), |acc, p| acc.observe(p)));

        assert_eq!(sequential.into_rows(), merged.into_rows());
    }
}
