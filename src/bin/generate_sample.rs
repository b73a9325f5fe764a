use std::path::PathBuf;

/// Logistic step from `high` to `low` centred on `mid` with the given width.
fn mixing_step(x: f64, mid: f64, width: f64, high: f64, low: f64) -> f64 {
    low + (high - low) / (1.0 + ((x - mid) / width).exp())
}

/// One ImageJ-style cross-section: bright background, two dark walls, and a
/// bright-to-dark mixing step between them.
fn generate_profile(
    pixels: usize,
    wall_left: f64,
    wall_right: f64,
    step_width: f64,
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<(f64, f64)> {
    let mid = 0.5 * (wall_left + wall_right);
    (0..pixels)
        .map(|i| {
            let x = i as f64;
            let wall = 150.0 * (-(x - wall_left).powi(2) / 8.0).exp()
                + 150.0 * (-(x - wall_right).powi(2) / 8.0).exp();
            let base = if x < wall_left || x > wall_right {
                170.0
            } else {
                mixing_step(x, mid, step_width, 210.0, 40.0)
            };
            let value = (base - wall + rng.read_noise(noise_level)).max(1.0);
            (x, value)
        })
        .collect()
}

/// Deterministic source of the acquisition noise and cut jitter
/// (splitmix64 stream).
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, span)`.
    fn jitter(&mut self, span: f64) -> f64 {
        span * (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Camera read noise: sum of twelve uniforms, centred (Irwin-Hall).
    fn read_noise(&mut self, sigma: f64) -> f64 {
        let sum: f64 = (0..12).map(|_| self.jitter(1.0)).sum();
        sigma * (sum - 6.0)
    }
}

fn main() -> std::io::Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_channel"));
    std::fs::create_dir_all(&out_dir)?;

    let mut rng = SimpleRng::new(42);

    let distances = [0u32, 5, 10, 15, 20];
    let replicates = 4;

    let mut written = 0;
    for &distance in &distances {
        // Diffusion broadens the step further down the channel.
        let step_width = 2.0 + 1.5 * distance as f64;

        for rep in 1..=replicates {
            // Each replicate is cut slightly differently across the channel.
            let pixels = 180 + rng.jitter(20.0) as usize;
            let wall_left = 20.0 + rng.jitter(6.0);
            let wall_right = pixels as f64 - 20.0 - rng.jitter(6.0);

            let profile =
                generate_profile(pixels, wall_left, wall_right, step_width, 3.0, &mut rng);

            let text: String = profile
                .iter()
                .map(|(x, v)| format!("{x}\t{v:.3}\n"))
                .collect();

            let path = out_dir.join(format!("{distance}mm_{rep}.hst"));
            std::fs::write(&path, text)?;
            written += 1;
        }
    }

    println!(
        "Wrote {written} profiles ({} distances × {replicates} replicates) to {}",
        distances.len(),
        out_dir.display()
    );
    Ok(())
}
