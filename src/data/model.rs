use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// EarthquakeRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single observed seismic event.
///
/// Serde names follow the source schema (`ano`, `profundidade_km`, `pais`,
/// `local`); the Rust fields use English names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeRecord {
    #[serde(rename = "ano")]
    pub year: i64,
    pub magnitude: f64,
    #[serde(rename = "profundidade_km")]
    pub depth_km: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "local")]
    pub location: String,
}

// ---------------------------------------------------------------------------
// EarthquakeDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter bounds.
///
/// Read-only after construction; the app shares it behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct EarthquakeDataset {
    /// All records in source order.
    pub records: Vec<EarthquakeRecord>,
    /// Sorted distinct years, the domain of the year filter.
    pub years: Vec<i64>,
    /// Observed (min, max) magnitude, the bounds of the magnitude slider.
    pub magnitude_range: (f64, f64),
}

impl EarthquakeDataset {
    /// Build filter bounds from the loaded records.
    pub fn from_records(records: Vec<EarthquakeRecord>) -> Self {
        let mut years: Vec<i64> = records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();

        let magnitude_range = records
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.magnitude), hi.max(r.magnitude))
            });

        EarthquakeDataset {
            records,
            years,
            magnitude_range,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Shared handle to a loaded dataset.
pub type SharedDataset = Arc<EarthquakeDataset>;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i64, magnitude: f64) -> EarthquakeRecord {
        EarthquakeRecord {
            year,
            magnitude,
            depth_km: 10.0,
            latitude: 0.0,
            longitude: 0.0,
            country: "Chile".to_string(),
            location: "Offshore Valparaíso".to_string(),
        }
    }

    #[test]
    fn from_records_computes_sorted_distinct_years() {
        let ds = EarthquakeDataset::from_records(vec![
            record(2024, 6.0),
            record(2023, 5.5),
            record(2024, 7.1),
        ]);
        assert_eq!(ds.years, vec![2023, 2024]);
    }

    #[test]
    fn from_records_computes_magnitude_range() {
        let ds = EarthquakeDataset::from_records(vec![
            record(2023, 5.5),
            record(2023, 8.2),
            record(2023, 6.0),
        ]);
        assert_eq!(ds.magnitude_range, (5.5, 8.2));
    }
}
