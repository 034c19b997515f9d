use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// A seismically active zone the generator scatters events around.
struct Zone {
    country: &'static str,
    location: &'static str,
    latitude: f64,
    longitude: f64,
    /// Typical hypocentre depth in km.
    depth: f64,
}

const ZONES: [Zone; 8] = [
    Zone { country: "Chile", location: "Offshore Valparaíso", latitude: -33.0, longitude: -72.2, depth: 35.0 },
    Zone { country: "Japón", location: "Costa de Tōhoku", latitude: 38.3, longitude: 142.4, depth: 30.0 },
    Zone { country: "Indonesia", location: "Mar de Banda", latitude: -6.5, longitude: 129.9, depth: 150.0 },
    Zone { country: "Perú", location: "Región de Arequipa", latitude: -16.3, longitude: -73.6, depth: 60.0 },
    Zone { country: "México", location: "Costa de Oaxaca", latitude: 16.2, longitude: -98.0, depth: 25.0 },
    Zone { country: "Filipinas", location: "Mindanao", latitude: 6.8, longitude: 126.4, depth: 45.0 },
    Zone { country: "Turquía", location: "Anatolia suroriental", latitude: 37.2, longitude: 37.0, depth: 12.0 },
    Zone { country: "Tonga", location: "Fosa de Tonga", latitude: -20.5, longitude: -173.9, depth: 200.0 },
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Exponentially distributed magnitude excess (Gutenberg–Richter-ish).
    fn magnitude(&mut self) -> f64 {
        let m = 5.5 - self.next_f64().max(1e-15).ln() * 0.6;
        (m.min(9.0) * 10.0).round() / 10.0
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let mut years: Vec<i64> = Vec::new();
    let mut magnitudes: Vec<f64> = Vec::new();
    let mut depths: Vec<f64> = Vec::new();
    let mut latitudes: Vec<f64> = Vec::new();
    let mut longitudes: Vec<f64> = Vec::new();
    let mut countries: Vec<String> = Vec::new();
    let mut locations: Vec<String> = Vec::new();

    for year in [2023i64, 2024] {
        for zone in &ZONES {
            // Zone activity varies between 20 and 50 events per year.
            let n_events = 20 + (rng.next_u64() % 31) as usize;
            for _ in 0..n_events {
                years.push(year);
                magnitudes.push(rng.magnitude());
                depths.push(rng.gauss(zone.depth, zone.depth * 0.3).max(1.0));
                latitudes.push((zone.latitude + rng.gauss(0.0, 1.2)).clamp(-90.0, 90.0));
                longitudes.push((zone.longitude + rng.gauss(0.0, 1.2)).clamp(-180.0, 180.0));
                countries.push(zone.country.to_string());
                locations.push(zone.location.to_string());
            }
        }
    }

    let n_rows = years.len();

    let schema = Arc::new(Schema::new(vec![
        Field::new("ano", DataType::Int64, false),
        Field::new("magnitude", DataType::Float64, false),
        Field::new("profundidade_km", DataType::Float64, false),
        Field::new("latitude", DataType::Float64, false),
        Field::new("longitude", DataType::Float64, false),
        Field::new("pais", DataType::Utf8, false),
        Field::new("local", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(years)),
            Arc::new(Float64Array::from(magnitudes)),
            Arc::new(Float64Array::from(depths)),
            Arc::new(Float64Array::from(latitudes)),
            Arc::new(Float64Array::from(longitudes)),
            Arc::new(StringArray::from(
                countries.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                locations.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let output_path = "terremotos.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {n_rows} earthquakes (2023–2024) to {output_path}");
}
