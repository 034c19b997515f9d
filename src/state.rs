use crate::data::aggregate::{
    self, HistogramBucket, HistogramField, SummaryStats,
};
use crate::data::filter::{FilterCriteria, filtered_indices};
use crate::data::model::SharedDataset;

/// How many locations the frequency table shows.
pub const TOP_LOCATION_COUNT: usize = 10;

/// Bucket count for the magnitude and depth histograms.
pub const HISTOGRAM_BUCKETS: usize = 30;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Derived views (filtered indices, summary, top locations, histograms) are
/// recomputed by [`AppState::refilter`] on every criteria change and cached
/// here; nothing else in the app recomputes them.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<SharedDataset>,

    /// Current (year, min magnitude) selection.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Scalar aggregates over the filtered set.
    pub summary: SummaryStats,

    /// Location frequency table, descending, at most TOP_LOCATION_COUNT rows.
    pub top_locations: Vec<(String, usize)>,

    /// Magnitude histogram over the filtered set.
    pub magnitude_histogram: Vec<HistogramBucket>,

    /// Depth histogram over the filtered set.
    pub depth_histogram: Vec<HistogramBucket>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria {
                year: 0,
                min_magnitude: 0.0,
            },
            visible_indices: Vec::new(),
            summary: SummaryStats::default(),
            top_locations: Vec::new(),
            magnitude_histogram: Vec::new(),
            depth_histogram: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and initialise the criteria.
    pub fn set_dataset(&mut self, dataset: SharedDataset) {
        self.criteria = FilterCriteria::initial(&dataset);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute all derived views after a criteria change.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.visible_indices = filtered_indices(ds, &self.criteria);
        self.summary = aggregate::summarize(ds, &self.visible_indices);
        self.top_locations =
            aggregate::top_locations(ds, &self.visible_indices, TOP_LOCATION_COUNT);
        self.magnitude_histogram = aggregate::histogram(
            ds,
            &self.visible_indices,
            HistogramField::Magnitude,
            HISTOGRAM_BUCKETS,
        );
        self.depth_histogram = aggregate::histogram(
            ds,
            &self.visible_indices,
            HistogramField::Depth,
            HISTOGRAM_BUCKETS,
        );
    }

    /// Select a year and recompute.
    pub fn set_year(&mut self, year: i64) {
        if self.criteria.year != year {
            self.criteria.year = year;
            self.refilter();
        }
    }

    /// Set the minimum magnitude and recompute.
    pub fn set_min_magnitude(&mut self, min_magnitude: f64) {
        if self.criteria.min_magnitude != min_magnitude {
            self.criteria.min_magnitude = min_magnitude;
            self.refilter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{EarthquakeDataset, EarthquakeRecord};
    use std::sync::Arc;

    fn record(year: i64, magnitude: f64, location: &str) -> EarthquakeRecord {
        EarthquakeRecord {
            year,
            magnitude,
            depth_km: 25.0,
            latitude: 28.2,
            longitude: 84.7,
            country: "Nepal".to_string(),
            location: location.to_string(),
        }
    }

    fn shared(rows: &[(i64, f64, &str)]) -> SharedDataset {
        Arc::new(EarthquakeDataset::from_records(
            rows.iter().map(|&(y, m, l)| record(y, m, l)).collect(),
        ))
    }

    #[test]
    fn set_dataset_initialises_and_filters() {
        let mut state = AppState::default();
        state.set_dataset(shared(&[
            (2023, 5.0, "Gorkha"),
            (2023, 6.0, "Gorkha"),
            (2023, 6.5, "Dolakha"),
            (2023, 7.2, "Gorkha"),
            (2023, 8.0, "Dolakha"),
        ]));
        // Initial criteria: year 2023, min magnitude 6.0.
        assert_eq!(state.criteria.year, 2023);
        assert_eq!(state.visible_indices, vec![1, 2, 3, 4]);
        assert_eq!(state.summary.count, 4);
    }

    #[test]
    fn criteria_change_recomputes_all_views() {
        let mut state = AppState::default();
        state.set_dataset(shared(&[
            (2023, 6.0, "Gorkha"),
            (2024, 7.0, "Dolakha"),
            (2024, 7.5, "Dolakha"),
        ]));
        state.set_year(2024);
        assert_eq!(state.visible_indices, vec![1, 2]);
        assert_eq!(state.summary.count, 2);
        assert_eq!(state.top_locations, vec![("Dolakha".to_string(), 2)]);
        assert_eq!(
            state
                .magnitude_histogram
                .iter()
                .map(|b| b.count)
                .sum::<usize>(),
            2
        );
    }

    #[test]
    fn empty_result_is_a_valid_state() {
        let mut state = AppState::default();
        state.set_dataset(shared(&[(2023, 6.0, "Gorkha")]));
        state.set_min_magnitude(9.5);
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.summary, SummaryStats::default());
        assert!(state.top_locations.is_empty());
        assert!(state.magnitude_histogram.is_empty());
        assert!(state.depth_histogram.is_empty());
    }
}
