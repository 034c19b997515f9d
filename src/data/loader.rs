use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::{EarthquakeDataset, EarthquakeRecord, SharedDataset};

/// Columns every source file must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "ano",
    "magnitude",
    "profundidade_km",
    "latitude",
    "longitude",
    "pais",
    "local",
];

/// The one fatal error of the data layer: the source file is missing,
/// unreadable, or malformed. Carries the full context chain from the loader.
#[derive(Debug, Error)]
#[error("earthquake data unavailable: {source:#}")]
pub struct DataUnavailable {
    #[from]
    source: anyhow::Error,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an earthquake dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – Parquet file with one scalar column per field (recommended)
/// * `.csv`     – header row with the required column names
/// * `.json`    – `[{ "ano": 2023, "magnitude": 6.8, ... }, ...]`
pub fn load_file(path: &Path) -> Result<EarthquakeDataset, DataUnavailable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(anyhow::anyhow!("Unsupported file extension: .{other}")),
    }?;

    validate(&records)?;
    Ok(EarthquakeDataset::from_records(records))
}

/// Memoized variant of [`load_file`]: the first call for a path reads the
/// file, later calls return the cached dataset without touching the
/// filesystem. The cache is never invalidated within the process lifetime.
pub fn load_cached(path: &Path) -> Result<SharedDataset, DataUnavailable> {
    static CACHE: LazyLock<Mutex<BTreeMap<PathBuf, SharedDataset>>> =
        LazyLock::new(|| Mutex::new(BTreeMap::new()));

    let mut cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(dataset) = cache.get(path) {
        return Ok(Arc::clone(dataset));
    }

    let dataset = Arc::new(load_file(path)?);
    cache.insert(path.to_path_buf(), Arc::clone(&dataset));
    Ok(dataset)
}

/// Reject malformed rows: the dataset is pre-baked, so a bad row means a bad
/// source file, not something to skip over.
fn validate(records: &[EarthquakeRecord]) -> Result<()> {
    for (i, r) in records.iter().enumerate() {
        if !r.magnitude.is_finite() {
            bail!("Row {i}: magnitude is not a finite number");
        }
        if r.depth_km.is_nan() || r.depth_km < 0.0 {
            bail!("Row {i}: depth {} km is not a non-negative number", r.depth_km);
        }
        if !(-90.0..=90.0).contains(&r.latitude) {
            bail!("Row {i}: latitude {} outside [-90, 90]", r.latitude);
        }
        if !(-180.0..=180.0).contains(&r.longitude) {
            bail!("Row {i}: longitude {} outside [-180, 180]", r.longitude);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "ano": 2023,
///     "magnitude": 6.8,
///     "profundidade_km": 21.5,
///     "latitude": -35.4,
///     "longitude": -72.9,
///     "pais": "Chile",
///     "local": "Offshore Maule"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<EarthquakeRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<EarthquakeRecord> =
        serde_json::from_str(&text).context("parsing JSON records")?;
    Ok(records)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming all required columns, one event per row.
fn load_csv(path: &Path) -> Result<Vec<EarthquakeRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing required column '{col}'");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<EarthquakeRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing earthquake data.
///
/// Expected schema: one scalar column per required field. Integer columns may
/// be Int32 or Int64, float columns Float32 or Float64, text columns Utf8 or
/// LargeUtf8. Works with files written by both **Pandas** (`df.to_parquet()`)
/// and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<EarthquakeRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let schema = builder.schema().clone();
    for col in REQUIRED_COLUMNS {
        if schema.index_of(col).is_err() {
            bail!("Parquet file missing required column '{col}'");
        }
    }

    let reader = builder.build().context("building parquet reader")?;
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        records.extend(batch_to_records(&batch)?);
    }
    Ok(records)
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet batch missing column '{name}'"))?;
    Ok(batch.column(idx))
}

fn batch_to_records(batch: &RecordBatch) -> Result<Vec<EarthquakeRecord>> {
    let years = i64_column(column(batch, "ano")?, "ano")?;
    let magnitudes = f64_column(column(batch, "magnitude")?, "magnitude")?;
    let depths = f64_column(column(batch, "profundidade_km")?, "profundidade_km")?;
    let latitudes = f64_column(column(batch, "latitude")?, "latitude")?;
    let longitudes = f64_column(column(batch, "longitude")?, "longitude")?;
    let countries = string_column(column(batch, "pais")?, "pais")?;
    let locations = string_column(column(batch, "local")?, "local")?;

    let records = (0..batch.num_rows())
        .map(|row| EarthquakeRecord {
            year: years[row],
            magnitude: magnitudes[row],
            depth_km: depths[row],
            latitude: latitudes[row],
            longitude: longitudes[row],
            country: countries[row].clone(),
            location: locations[row].clone(),
        })
        .collect();
    Ok(records)
}

fn reject_nulls(col: &ArrayRef, name: &str) -> Result<()> {
    if col.null_count() > 0 {
        bail!("Column '{name}' contains null values");
    }
    Ok(())
}

/// Extract an integer column as `Vec<i64>`, accepting Int32 or Int64.
fn i64_column(col: &ArrayRef, name: &str) -> Result<Vec<i64>> {
    reject_nulls(col, name)?;
    if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(arr.values().to_vec())
    } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        Ok(arr.values().iter().map(|&v| v as i64).collect())
    } else {
        bail!(
            "Column '{name}' has type {:?}, expected Int32 or Int64",
            col.data_type()
        )
    }
}

/// Extract a float column as `Vec<f64>`, accepting Float32 or Float64.
fn f64_column(col: &ArrayRef, name: &str) -> Result<Vec<f64>> {
    reject_nulls(col, name)?;
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.values().to_vec())
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.values().iter().map(|&v| v as f64).collect())
    } else {
        bail!(
            "Column '{name}' has type {:?}, expected Float32 or Float64",
            col.data_type()
        )
    }
}

/// Extract a text column as `Vec<String>`, accepting Utf8 or LargeUtf8.
fn string_column(col: &ArrayRef, name: &str) -> Result<Vec<String>> {
    reject_nulls(col, name)?;
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok((0..arr.len()).map(|i| arr.value(i).to_string()).collect())
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            Ok((0..arr.len()).map(|i| arr.value(i).to_string()).collect())
        }
        other => bail!("Column '{name}' has type {other:?}, expected Utf8 or LargeUtf8"),
    }
}
