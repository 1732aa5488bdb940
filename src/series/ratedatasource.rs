use std::fs::File;
use std::io::BufReader;
use std::path::{
    Path,
    PathBuf
};

use chrono::NaiveDate;

use serde::Deserialize;
use thiserror::Error;

use crate::series::rateseries::{
    RateSeries,
    SeriesKind
};

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error)
}

/// Supplier of a published daily series. Acquisition policy (remote
/// endpoints, caching, retry) lives entirely behind this seam; the core
/// only requires an ordered series and propagates source errors
/// unmodified.
pub trait RateDataSource {
    fn fetch_series(&self,
                    kind: SeriesKind,
                    start_date: NaiveDate,
                    end_date: NaiveDate) -> Result<RateSeries, DataSourceError>;
}

#[derive(Deserialize)]
struct SeriesRow {
    date: NaiveDate,
    value: f64
}

/// File-backed source reading `[{"date": "YYYY-MM-DD", "value": ...}]`
/// arrays, one file per series kind. Used by the demo binary in place of
/// a remote feed.
pub struct JsonFileDataSource {
    overnight_path: PathBuf,
    index_path: PathBuf
}

impl JsonFileDataSource {
    pub fn new(overnight_path: PathBuf, index_path: PathBuf) -> JsonFileDataSource {
        JsonFileDataSource { overnight_path, index_path }
    }

    fn read_rows(path: &Path) -> Result<Vec<SeriesRow>, DataSourceError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let rows = serde_json::from_reader(reader)?;
        Ok(rows)
    }
}

impl RateDataSource for JsonFileDataSource {
    fn fetch_series(&self,
                    kind: SeriesKind,
                    start_date: NaiveDate,
                    end_date: NaiveDate) -> Result<RateSeries, DataSourceError> {
        let path = match kind {
            SeriesKind::OvernightRate => &self.overnight_path,
            SeriesKind::CompoundedIndex => &self.index_path
        };
        let mut series = RateSeries::new();
        for row in Self::read_rows(path)? {
            if (row.date >= start_date) && (row.date <= end_date) {
                series.insert(row.date, row.value);
            }
        }
        Ok(series)
    }
}
