use scour_panda::data::model::{Study, REQUIRED_COLUMNS};

/// Deterministic splitmix64 stream, enough to scatter synthetic flume runs.
struct FlumeRng(u64);

impl FlumeRng {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        ((z ^ (z >> 31)) >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform draw from [lo, hi).
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// One synthetic flume run: y2 follows the geometric contraction law with
/// a few percent of scatter, so the points land near the identity line.
fn flume_run(rng: &mut FlumeRng, regime: &str, study: &str) -> Vec<String> {
    let u1 = rng.uniform(0.25, 0.65);
    let y1 = rng.uniform(0.05, 0.20);
    let ratio_b2_b1 = rng.uniform(0.40, 0.90);
    let d50_mm = rng.uniform(0.5, 2.5);
    let geom_std = rng.uniform(1.1, 1.8);
    let specific_density = 2.65;
    let y2 = y1 * (1.0 / ratio_b2_b1).powf(0.75) * rng.uniform(0.9, 1.1);

    vec![
        regime.to_string(),
        study.to_string(),
        format!("{u1:.3}"),
        format!("{y1:.3}"),
        format!("{ratio_b2_b1:.3}"),
        format!("{d50_mm:.2}"),
        format!("{geom_std:.2}"),
        format!("{specific_density:.2}"),
        format!("{y2:.4}"),
    ]
}

fn main() {
    let mut rng = FlumeRng(42);
    let output_path = "sample_contraction_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    // Padded headers, the way spreadsheet exports tend to come out.
    let headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| format!(" {c} ")).collect();
    writer.write_record(&headers).expect("Failed to write header");

    let mut n_rows = 0;
    for study in Study::ALL {
        for _ in 0..8 {
            let record = flume_run(&mut rng, "live-bed", study.label());
            writer.write_record(&record).expect("Failed to write row");
            n_rows += 1;
        }
    }
    for _ in 0..6 {
        let record = flume_run(&mut rng, "clear-water", "Straub");
        writer.write_record(&record).expect("Failed to write row");
        n_rows += 1;
    }
    // A study outside the comparison set; the analysis drops it.
    let record = flume_run(&mut rng, "live-bed", "Laursen");
    writer.write_record(&record).expect("Failed to write row");
    n_rows += 1;

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} flume runs to {output_path}");
}
