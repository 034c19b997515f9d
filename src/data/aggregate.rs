use std::collections::HashMap;

use super::model::EarthquakeDataset;

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Scalar aggregates over a filtered set. `mean_magnitude` and
/// `top_location` are `None` when the set is empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryStats {
    pub count: usize,
    pub mean_magnitude: Option<f64>,
    /// Most frequent location and its occurrence count.
    pub top_location: Option<(String, usize)>,
}

/// Compute [`SummaryStats`] for the records at `indices`.
pub fn summarize(dataset: &EarthquakeDataset, indices: &[usize]) -> SummaryStats {
    if indices.is_empty() {
        return SummaryStats::default();
    }

    let sum: f64 = indices.iter().map(|&i| dataset.records[i].magnitude).sum();
    let mean_magnitude = Some(sum / indices.len() as f64);
    let top_location = top_locations(dataset, indices, 1).into_iter().next();

    SummaryStats {
        count: indices.len(),
        mean_magnitude,
        top_location,
    }
}

// ---------------------------------------------------------------------------
// Location frequencies
// ---------------------------------------------------------------------------

/// Occurrence counts per location, descending, at most `n` entries.
/// Ties keep first-encountered order (stable sort over insertion order).
pub fn top_locations(
    dataset: &EarthquakeDataset,
    indices: &[usize],
    n: usize,
) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for &i in indices {
        let location = &dataset.records[i].location;
        match position.get(location.as_str()) {
            Some(&pos) => order[pos].1 += 1,
            None => {
                position.insert(location, order.len());
                order.push((location.clone(), 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(n);
    order
}

// ---------------------------------------------------------------------------
// Histograms
// ---------------------------------------------------------------------------

/// Which numeric field a histogram buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramField {
    Magnitude,
    Depth,
}

/// One histogram bucket: the half-open value range `[lo, hi)` (the last
/// bucket includes `hi`) and the number of records falling in it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBucket {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Bucket the chosen field of the records at `indices` into `bucket_count`
/// equal ranges spanning the observed min..max. Bucket counts always sum to
/// `indices.len()`; an empty input yields an empty vector. A degenerate
/// range (all values equal) puts everything in the first bucket.
pub fn histogram(
    dataset: &EarthquakeDataset,
    indices: &[usize],
    field: HistogramField,
    bucket_count: usize,
) -> Vec<HistogramBucket> {
    if indices.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let value = |i: usize| -> f64 {
        let r = &dataset.records[i];
        match field {
            HistogramField::Magnitude => r.magnitude,
            HistogramField::Depth => r.depth_km,
        }
    };

    let (min, max) = indices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &i| {
            (lo.min(value(i)), hi.max(value(i)))
        });
    let width = (max - min) / bucket_count as f64;

    let mut buckets: Vec<HistogramBucket> = (0..bucket_count)
        .map(|b| HistogramBucket {
            lo: min + b as f64 * width,
            hi: min + (b + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &i in indices {
        let b = if width > 0.0 {
            // Clamp so the max value lands in the last bucket.
            (((value(i) - min) / width) as usize).min(bucket_count - 1)
        } else {
            0
        };
        buckets[b].count += 1;
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::EarthquakeRecord;

    fn record(magnitude: f64, depth_km: f64, location: &str) -> EarthquakeRecord {
        EarthquakeRecord {
            year: 2023,
            magnitude,
            depth_km,
            latitude: -16.3,
            longitude: -73.6,
            country: "Perú".to_string(),
            location: location.to_string(),
        }
    }

    fn dataset(rows: &[(f64, f64, &str)]) -> EarthquakeDataset {
        EarthquakeDataset::from_records(
            rows.iter().map(|&(m, d, l)| record(m, d, l)).collect(),
        )
    }

    fn all_indices(ds: &EarthquakeDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn summarize_empty_set() {
        let ds = dataset(&[]);
        let stats = summarize(&ds, &[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean_magnitude, None);
        assert_eq!(stats.top_location, None);
    }

    #[test]
    fn summarize_counts_and_mean() {
        let ds = dataset(&[
            (6.5, 10.0, "Atacama"),
            (7.2, 35.0, "Atacama"),
            (8.0, 22.0, "Mindanao"),
        ]);
        let indices = all_indices(&ds);
        let stats = summarize(&ds, &indices);
        assert_eq!(stats.count, 3);
        let mean = stats.mean_magnitude.unwrap();
        assert!((mean - (6.5 + 7.2 + 8.0) / 3.0).abs() < 1e-12);
        assert_eq!(stats.top_location, Some(("Atacama".to_string(), 2)));
    }

    #[test]
    fn summarize_is_idempotent() {
        let ds = dataset(&[(6.5, 10.0, "Atacama"), (7.2, 35.0, "Mindanao")]);
        let indices = all_indices(&ds);
        assert_eq!(summarize(&ds, &indices), summarize(&ds, &indices));
    }

    #[test]
    fn top_locations_descending_with_first_seen_ties() {
        let ds = dataset(&[
            (6.0, 10.0, "A"),
            (6.0, 10.0, "A"),
            (6.0, 10.0, "B"),
            (6.0, 10.0, "C"),
            (6.0, 10.0, "C"),
            (6.0, 10.0, "C"),
        ]);
        let indices = all_indices(&ds);
        let top = top_locations(&ds, &indices, 2);
        assert_eq!(
            top,
            vec![("C".to_string(), 3), ("A".to_string(), 2)]
        );

        // B and a new D tie at 1: B was encountered first.
        let ds = dataset(&[(6.0, 10.0, "B"), (6.0, 10.0, "D")]);
        let indices = all_indices(&ds);
        let top = top_locations(&ds, &indices, 10);
        assert_eq!(
            top,
            vec![("B".to_string(), 1), ("D".to_string(), 1)]
        );
    }

    #[test]
    fn top_locations_empty_input() {
        let ds = dataset(&[]);
        assert!(top_locations(&ds, &[], 10).is_empty());
    }

    #[test]
    fn histogram_counts_sum_to_input_len() {
        let ds = dataset(&[
            (5.1, 8.0, "A"),
            (6.3, 60.0, "B"),
            (6.3, 60.0, "B"),
            (7.9, 550.0, "C"),
            (8.0, 12.5, "D"),
        ]);
        let indices = all_indices(&ds);
        for bucket_count in [1, 2, 7, 30] {
            for field in [HistogramField::Magnitude, HistogramField::Depth] {
                let buckets = histogram(&ds, &indices, field, bucket_count);
                assert_eq!(buckets.len(), bucket_count);
                let total: usize = buckets.iter().map(|b| b.count).sum();
                assert_eq!(total, indices.len());
            }
        }
    }

    #[test]
    fn histogram_max_value_lands_in_last_bucket() {
        let ds = dataset(&[(5.0, 0.0, "A"), (6.0, 0.0, "B"), (7.0, 0.0, "C")]);
        let indices = all_indices(&ds);
        let buckets = histogram(&ds, &indices, HistogramField::Magnitude, 2);
        assert_eq!(buckets[0].count, 1); // 5.0 in [5, 6)
        assert_eq!(buckets[1].count, 2); // 6.0 in [6, 7) and 7.0 clamped into [6, 7]
    }

    #[test]
    fn histogram_degenerate_range() {
        let ds = dataset(&[(6.5, 10.0, "A"), (6.5, 10.0, "B")]);
        let indices = all_indices(&ds);
        let buckets = histogram(&ds, &indices, HistogramField::Magnitude, 5);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn histogram_empty_input() {
        let ds = dataset(&[]);
        assert!(histogram(&ds, &[], HistogramField::Depth, 30).is_empty());
    }
}
