use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Deterministic sample extract in the shape of nama_10_gdp_1_Data.csv
// ---------------------------------------------------------------------------

const OUTPUT_PATH: &str = "data/nama_10_gdp_1_Data.csv";

const YEARS: std::ops::RangeInclusive<i32> = 2008..=2019;

/// (label as it appears in the raw extract, economy size in million euro)
const GEOS: [(&str, f64); 10] = [
    ("European Union - 28 countries", 14_000_000.0),
    (
        "Euro area (EA11-2000, EA12-2006, EA13-2007, EA15-2008, EA16-2010, EA17-2013, EA18-2014, EA19)",
        10_000_000.0,
    ),
    (
        "Germany (until 1990 former territory of the FRG)",
        3_000_000.0,
    ),
    ("France", 2_200_000.0),
    ("Italy", 1_700_000.0),
    ("Spain", 1_100_000.0),
    ("Netherlands", 700_000.0),
    ("Sweden", 450_000.0),
    ("Norway", 350_000.0),
    (
        "Kosovo (under United Nations Security Council Resolution 1244/99)",
        6_000.0,
    ),
];

/// (indicator, rough share of GDP)
const INDICATORS: [(&str, f64); 5] = [
    ("Gross domestic product at market prices", 1.0),
    ("Value added, gross", 0.9),
    ("Final consumption expenditure", 0.77),
    ("Exports of goods and services", 0.45),
    ("Imports of goods and services", 0.42),
];

const UNITS: [&str; 3] = [
    "Current prices, million euro",
    "Current prices, euro per capita",
    "Chain linked volumes, index 2010=100",
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
}

/// One plausible value for a (geo, indicator, unit, year) cell.
fn sample_value(unit_idx: usize, size: f64, share: f64, year: i32, rng: &mut SimpleRng) -> f64 {
    let growth = 1.02f64.powi(year - 2010);
    let noise = 1.0 + rng.gauss(0.0, 0.01);
    match unit_idx {
        0 => size * share * growth * noise,
        1 => 28_000.0 * share * growth * noise,
        _ => 100.0 * 1.015f64.powi(year - 2010) * noise,
    }
}

/// Format a value the way the raw extract does: `.` thousands separators,
/// `,` decimal mark, one decimal place.
fn format_european(value: f64) -> String {
    let scaled = (value * 10.0).round() as i64;
    let whole = scaled / 10;
    let tenth = (scaled % 10).abs();

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && ch.is_ascii_digit() && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{grouped},{tenth}")
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all("data").context("creating data directory")?;
    let mut writer = csv::Writer::from_path(OUTPUT_PATH).context("creating output CSV")?;
    writer.write_record(["TIME", "GEO", "NA_ITEM", "UNIT", "Value", "Flag and Footnotes"])?;

    let mut rows = 0usize;
    for year in YEARS {
        let year_text = year.to_string();
        for (geo, size) in GEOS {
            for (indicator, share) in INDICATORS {
                for (unit_idx, &unit) in UNITS.iter().enumerate() {
                    // Kosovo reporting only starts in 2011, like the real extract
                    let missing = (geo.starts_with("Kosovo") && year < 2011)
                        || rng.next_f64() < 0.015;
                    let cell = if missing {
                        ":".to_string()
                    } else {
                        format_european(sample_value(unit_idx, size, share, year, &mut rng))
                    };

                    let flag = if !missing && rng.next_f64() < 0.03 { "e" } else { "" };
                    writer.write_record([
                        year_text.as_str(),
                        geo,
                        indicator,
                        unit,
                        cell.as_str(),
                        flag,
                    ])?;
                    rows += 1;
                }
            }
        }
    }
    writer.flush().context("flushing output CSV")?;

    println!("Wrote {rows} rows to {OUTPUT_PATH}");
    Ok(())
}
