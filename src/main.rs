//! Marching Tiles demo
//!
//! Builds a seeded layout, prints it, then erases terrain with a few seeded
//! collisions and prints the re-derived tiles.

#[cfg(not(target_arch = "wasm32"))]
use marching_tiles::{LayoutSettings, TileDescriptor, TileLayout};

/// Number of collisions the demo applies
#[cfg(not(target_arch = "wasm32"))]
const DEMO_COLLISIONS: usize = 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Marching Tiles starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => LayoutSettings::load_or_default(path),
        None => LayoutSettings::default(),
    };

    let mut layout = match TileLayout::from_settings(&settings) {
        Ok(layout) => layout,
        Err(e) => {
            log::error!("Cannot build layout: {}", e);
            std::process::exit(1);
        }
    };
    println!("{}", render_ascii(&layout));

    let mut rng = Pcg32::seed_from_u64(settings.seed.wrapping_add(1));
    let (w, h) = (settings.width as f32, settings.height as f32);

    for _ in 0..DEMO_COLLISIONS {
        let pos = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
        match layout.apply_collision(pos) {
            Ok(update) => {
                let cells: Vec<String> = update
                    .tiles
                    .iter()
                    .map(|t| format!("({}, {})", t.cell.x, t.cell.y))
                    .collect();
                println!(
                    "hit ({:.2}, {:.2}) -> sample ({}, {}), re-derived {}",
                    pos.x,
                    pos.y,
                    update.sample.position.x,
                    update.sample.position.y,
                    cells.join(" ")
                );
            }
            Err(e) => log::error!("Collision failed: {}", e),
        }
    }

    println!("\n{}", render_ascii(&layout));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library only on wasm32
}

/// Quadrant glyph per configuration (TL, TR, BR, BL bits)
#[cfg(not(target_arch = "wasm32"))]
const GLYPHS: [char; 16] = [
    ' ', '▖', '▗', '▄', '▝', '▞', '▐', '▟', '▘', '▌', '▚', '▙', '▀', '▛', '▜', '█',
];

/// Draw the layout with the top row first
#[cfg(not(target_arch = "wasm32"))]
fn render_ascii(layout: &TileLayout) -> String {
    use glam::IVec2;

    let cols = layout.grid().width() as i32 - 1;
    let rows = layout.grid().height() as i32 - 1;

    (0..rows)
        .rev()
        .map(|y| {
            (0..cols)
                .map(|x| match layout.directive(IVec2::new(x, y)) {
                    Some(tile) => {
                        let config = TileDescriptor::new(tile.asset, tile.rotation).configuration();
                        GLYPHS[config.bits() as usize]
                    }
                    None => '?',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
