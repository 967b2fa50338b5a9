use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**).  Seeded with a constant so
/// every run writes the same file and timings stay comparable.
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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

// Rough bounding boxes: (state, lat_min, lat_max, long_min, long_max)
const STATES: &[(&str, f64, f64, f64, f64)] = &[
    ("AK", 54.0, 71.0, -168.0, -141.0),
    ("AL", 30.2, 35.0, -88.5, -84.9),
    ("CA", 32.5, 42.0, -124.4, -114.1),
    ("CO", 37.0, 41.0, -109.1, -102.0),
    ("FL", 24.5, 31.0, -87.6, -80.0),
    ("NY", 40.5, 45.0, -79.8, -71.8),
    ("TX", 25.8, 36.5, -106.6, -93.5),
    ("WA", 45.5, 49.0, -124.8, -116.9),
];

const ROWS: usize = 10_000;

/// Write a synthetic `uspop.csv` (City,State,Population,Latitude,Longitude).
/// Usage: `generate_sample [OUTPUT]`
fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "uspop.csv".to_string());

    // Same seed every run: benchmark numbers must come from identical input.
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record(["City", "State", "Population", "Latitude", "Longitude"])?;
    for i in 0..ROWS {
        let (state, lat_min, lat_max, long_min, long_max) =
            STATES[(rng.next_u64() % STATES.len() as u64) as usize];

        // About a third of the places have no recorded population.
        let population = if rng.next_f64() < 0.33 {
            String::new()
        } else {
            ((rng.next_f64() * 50_000.0) as u64 + 100).to_string()
        };
        let lat = rng.uniform(lat_min, lat_max);
        let long = rng.uniform(long_min, long_max);

        writer.write_record([
            format!("Town {i}"),
            state.to_string(),
            population,
            format!("{lat:.7}"),
            format!("{long:.7}"),
        ])?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {ROWS} rows to {output_path}");
    Ok(())
}
