use chrono::NaiveDate;

use serde::{
    Serialize,
    Deserialize
};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("date {0} cannot be resolved on the business day calendar")]
pub struct DateNotFoundError(pub NaiveDate);

/// How a base date that is not itself listed on the calendar is matched.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ResolveDirection {
    /// The base date must be listed.
    Exact,
    /// Fall back to the earliest listed date strictly after the base date.
    Following,
    /// Fall back to the latest listed date strictly before the base date.
    Preceding
}

/// Ordered, deduplicated sequence of the dates on which the underlying
/// rate was published. Non-business days are the gaps between entries.
///
/// Built once from the union of the input series' dates and immutable
/// afterwards; both the rate calculator and the comparison engine resolve
/// their accrual windows against this single sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessDayCalendar {
    dates: Vec<NaiveDate>
}

impl BusinessDayCalendar {
    pub fn new(mut dates: Vec<NaiveDate>) -> BusinessDayCalendar {
        dates.sort_unstable();
        dates.dedup();
        BusinessDayCalendar { dates }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn date_at(&self, position: usize) -> Option<NaiveDate> {
        self.dates.get(position).copied()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn position_of(&self, d: NaiveDate) -> Result<usize, DateNotFoundError> {
        self.dates.binary_search(&d).map_err(|_| DateNotFoundError(d))
    }

    /// Resolves `base_date` to a listed position under `direction`, then
    /// shifts the *position* by `offset` calendar slots (not calendar
    /// days). A shifted position outside `[0, len - 1]` is an error.
    pub fn resolve(&self,
                   base_date: NaiveDate,
                   direction: ResolveDirection,
                   offset: i64) -> Result<NaiveDate, DateNotFoundError> {
        let base_position = match self.dates.binary_search(&base_date) {
            Ok(position) => position,
            Err(insertion) => match direction {
                ResolveDirection::Exact => return Err(DateNotFoundError(base_date)),
                ResolveDirection::Following => insertion,
                ResolveDirection::Preceding => {
                    if insertion == 0 {
                        return Err(DateNotFoundError(base_date));
                    }
                    insertion - 1
                }
            }
        };
        let shifted = base_position as i64 + offset;
        if (shifted < 0) || (shifted >= self.dates.len() as i64) {
            Err(DateNotFoundError(base_date))
        } else {
            Ok(self.dates[shifted as usize])
        }
    }

    /// Listed dates in `[from, to]`, both bounds inclusive. A bound that
    /// is not itself listed degenerates to the intersection with the
    /// listed dates.
    pub fn slice(&self, from: NaiveDate, to: NaiveDate) -> &[NaiveDate] {
        let lower = self.dates.partition_point(|d| *d < from);
        let upper = self.dates.partition_point(|d| *d <= to);
        if lower >= upper {
            &[]
        } else {
            &self.dates[lower..upper]
        }
    }
}
