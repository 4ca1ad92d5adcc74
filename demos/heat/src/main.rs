use heatgrid::color::{MAX_SUPPLY, MIN_SUPPLY};
use heatgrid::d2::{quads, DiffusionEngine, GridState, SourceEdit};
use heatgrid::SimConfig;
use ndarray::Array;
use noise::{NoiseFn, Perlin};

fn main() {
    env_logger::init();

    const N_FRAME: usize = 240;
    const N_SOURCE: usize = 5;

    let config = SimConfig::default();
    let mut grid = GridState::from_config(&config);
    let (w, h) = grid.dim();

    let perlin = Perlin::new();
    let freq = 3.0;
    let height_map = Array::from_shape_fn((w, h), |(i, j)| {
        perlin.get([i as f64 / w as f64 * freq, j as f64 / h as f64 * freq, 0.5])
    });

    // Hot sources on the peaks, cold ones in the valleys.
    let mut ranked: Vec<_> = height_map.indexed_iter().collect();
    ranked.sort_by(|a, b| a.1.total_cmp(b.1));

    for &((x, y), _) in ranked.iter().take(N_SOURCE) {
        grid.apply(SourceEdit::Cold { x, y }).unwrap();
    }
    for &((x, y), _) in ranked.iter().rev().take(N_SOURCE) {
        grid.apply(SourceEdit::Heat { x, y }).unwrap();
    }
    log::info!(
        "{}x{} grid, {} sources in [{}, {}]",
        w,
        h,
        2 * N_SOURCE,
        MIN_SUPPLY,
        MAX_SUPPLY
    );

    let mut engine = DiffusionEngine::new();
    let cell_px = config.cell_px as f64;

    for f in 1..=N_FRAME {
        engine.step(&mut grid);
        image_util::save_mesh(
            "heat",
            f,
            quads(&grid, cell_px),
            config.width_px,
            config.height_px,
        )
        .unwrap();

        eprint!("\r {} / {}", f, N_FRAME);
    }
}
