//! Writes a synthetic `spacex_launch_dash.csv` with the dashboard's column
//! layout. Output is deterministic for a given seed.

use anyhow::{Context, Result};

const LAUNCH_COUNT: usize = 56;
const MAX_PAYLOAD_KG: f64 = 9600.0;

/// (site, relative launch frequency)
const SITES: [(&str, f64); 4] = [
    ("CCAFS LC-40", 0.45),
    ("KSC LC-39A", 0.25),
    ("VAFB SLC-4E", 0.18),
    ("CCAFS SLC-40", 0.12),
];

/// (booster category, success probability), in flight order.
const BOOSTERS: [(&str, f64); 5] = [
    ("v1.0", 0.1),
    ("v1.1", 0.3),
    ("FT", 0.6),
    ("B4", 0.7),
    ("B5", 0.95),
];

/// xoshiro256** seeded from a fixed value so every run writes the same CSV.
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

    /// Uniform in `[0, 1)` from the top 53 bits.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick_site(&mut self) -> &'static str {
        let mut roll = self.next_f64();
        for (site, weight) in SITES {
            if roll < weight {
                return site;
            }
            roll -= weight;
        }
        SITES[0].0
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "spacex_launch_dash.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;

    for i in 0..LAUNCH_COUNT {
        let (category, p_success) = BOOSTERS[i * BOOSTERS.len() / LAUNCH_COUNT];
        let site = rng.pick_site();
        // Later boosters carry heavier payloads.
        let ceiling = MAX_PAYLOAD_KG * (0.3 + 0.7 * i as f64 / LAUNCH_COUNT as f64);
        let payload = (rng.next_f64() * ceiling).round();
        let class = u8::from(rng.next_f64() < p_success);
        let booster = format!("F9 {category} B{:04}", 1000 + i);

        writer.write_record([
            i.to_string(),
            (i + 1).to_string(),
            site.to_string(),
            class.to_string(),
            format!("{payload:.1}"),
            booster,
            category.to_string(),
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {LAUNCH_COUNT} launches to {output_path}");
    Ok(())
}
