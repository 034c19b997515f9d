/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .parquet / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → EarthquakeDataset (memoized per path)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ EarthquakeDataset │  Vec<EarthquakeRecord>, filter bounds
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply (year, min magnitude) → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  summary stats, top locations, histograms
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
