use csv::Writer;

/// Gene panel written to both tables, with the latent block driving each
/// gene's abundance: tetracycline genes co-vary, integron genes co-vary,
/// ermB/sul1 sit in between.
const GENE_BLOCKS: [(&str, usize, f64); 9] = [
    ("tet33", 0, 0.8),
    ("tetG", 0, 1.2),
    ("tetM", 0, 1.0),
    ("tetX", 0, 0.6),
    ("ermB", 1, 0.9),
    ("sul1", 1, 1.4),
    ("intI1", 2, 1.1),
    ("intI2", 2, 0.7),
    ("intI3", 2, 0.5),
];

const N_BLOCKS: usize = 3;
const ROWS_PER_LABEL: usize = 12;

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

/// One synthetic sample: relative abundances driven by per-block latents.
/// `coupling` close to 1 makes within-block genes rank-concordant.
fn generate_row(coupling: f64, rng: &mut SimpleRng) -> Vec<f64> {
    let latents: Vec<f64> = (0..N_BLOCKS).map(|_| rng.gauss(0.0, 1.0)).collect();

    GENE_BLOCKS
        .iter()
        .map(|&(_, block, scale)| {
            let signal = coupling * latents[block] + (1.0 - coupling) * rng.gauss(0.0, 1.0);
            scale * (0.4 * signal).exp()
        })
        .collect()
}

fn write_table(path: &str, label_column: &str, rng: &mut SimpleRng) {
    let mut writer = Writer::from_path(path).expect("Failed to create output file");

    let mut header = vec![label_column.to_string()];
    header.extend(GENE_BLOCKS.iter().map(|&(gene, _, _)| gene.to_string()));
    writer.write_record(&header).expect("Failed to write header");

    // Pit samples couple tightly to their blocks, fresh ones barely.
    for (label, coupling) in [("Pit", 0.9), ("Fresh", 0.35)] {
        for _ in 0..ROWS_PER_LABEL {
            let mut record = vec![label.to_string()];
            record.extend(generate_row(coupling, rng).iter().map(|v| format!("{v:.6}")));
            writer.write_record(&record).expect("Failed to write row");
        }
    }

    writer.flush().expect("Failed to flush output file");
}

fn main() {
    let mut rng = SimpleRng::new(42);

    write_table("Pit_Fresh_Extra.csv", "exDNA type", &mut rng);
    write_table("Pit_Fresh_Intra.csv", "iDNA type", &mut rng);

    println!(
        "Wrote {} samples each to Pit_Fresh_Extra.csv and Pit_Fresh_Intra.csv",
        2 * ROWS_PER_LABEL
    );
}
