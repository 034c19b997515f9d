use super::model::EarthquakeDataset;

// ---------------------------------------------------------------------------
// Filter criteria: the (year, min magnitude) pair picked in the sidebar
// ---------------------------------------------------------------------------

/// The user's current selection. `year` is one of the dataset's distinct
/// years; records with `magnitude >= min_magnitude` pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    pub year: i64,
    pub min_magnitude: f64,
}

/// Slider default when a dataset is first loaded.
pub const DEFAULT_MIN_MAGNITUDE: f64 = 6.0;

impl FilterCriteria {
    /// Initial criteria for a freshly loaded dataset: the first available
    /// year, and the default minimum magnitude clamped into the observed
    /// magnitude range.
    pub fn initial(dataset: &EarthquakeDataset) -> Self {
        let (mag_min, mag_max) = dataset.magnitude_range;
        let min_magnitude = if dataset.is_empty() {
            DEFAULT_MIN_MAGNITUDE
        } else {
            DEFAULT_MIN_MAGNITUDE.clamp(mag_min, mag_max)
        };
        FilterCriteria {
            year: dataset.years.first().copied().unwrap_or(0),
            min_magnitude,
        }
    }
}

/// Return indices of records that pass the current criteria.
///
/// Pure and order-preserving: the result is a subsequence of the dataset's
/// row order. An empty result is a valid state, not an error.
pub fn filtered_indices(dataset: &EarthquakeDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.year == criteria.year && r.magnitude >= criteria.min_magnitude)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::EarthquakeRecord;

    fn record(year: i64, magnitude: f64) -> EarthquakeRecord {
        EarthquakeRecord {
            year,
            magnitude,
            depth_km: 33.0,
            latitude: 38.3,
            longitude: 142.4,
            country: "Japón".to_string(),
            location: "Costa de Tōhoku".to_string(),
        }
    }

    fn dataset(rows: &[(i64, f64)]) -> EarthquakeDataset {
        EarthquakeDataset::from_records(rows.iter().map(|&(y, m)| record(y, m)).collect())
    }

    #[test]
    fn selects_matching_year_and_magnitude() {
        let ds = dataset(&[
            (2023, 5.0),
            (2023, 6.0),
            (2023, 6.5),
            (2023, 7.2),
            (2023, 8.0),
        ]);
        let indices = filtered_indices(
            &ds,
            &FilterCriteria {
                year: 2023,
                min_magnitude: 6.5,
            },
        );
        assert_eq!(indices, vec![2, 3, 4]);
        for &i in &indices {
            assert!(ds.records[i].year == 2023 && ds.records[i].magnitude >= 6.5);
        }
    }

    #[test]
    fn preserves_source_order() {
        let ds = dataset(&[(2023, 8.0), (2024, 7.0), (2023, 6.1), (2023, 7.5)]);
        let indices = filtered_indices(
            &ds,
            &FilterCriteria {
                year: 2023,
                min_magnitude: 6.0,
            },
        );
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn threshold_above_max_yields_empty_not_error() {
        let ds = dataset(&[(2023, 5.0), (2023, 6.4)]);
        let indices = filtered_indices(
            &ds,
            &FilterCriteria {
                year: 2023,
                min_magnitude: 9.0,
            },
        );
        assert!(indices.is_empty());
    }

    #[test]
    fn initial_criteria_uses_first_year_and_clamped_default() {
        let ds = dataset(&[(2024, 7.0), (2023, 6.8)]);
        let criteria = FilterCriteria::initial(&ds);
        assert_eq!(criteria.year, 2023);
        assert_eq!(criteria.min_magnitude, 6.8); // default 6.0 clamped up to min

        let ds = dataset(&[(2023, 5.0), (2023, 8.0)]);
        assert_eq!(FilterCriteria::initial(&ds).min_magnitude, DEFAULT_MIN_MAGNITUDE);
    }
}
