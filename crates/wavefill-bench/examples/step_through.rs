//! Wavefill step-through demo.
//!
//! Builds the 10x10 reference grid, draws a few walls the way a user
//! would by clicking, then advances the flood fill one wave per
//! iteration and prints each glowing wave.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example step_through

use log::info;
use wavefill_core::Coord;
use wavefill_engine::{EngineConfig, FloodFillEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let walls = (0..8).map(|row| Coord::new(row, 4)).collect();
    let mut engine = FloodFillEngine::from_config(EngineConfig {
        walls,
        ..EngineConfig::default()
    })?;

    // Late edit between setup and the first step.
    engine.toggle_wall(5, 1)?;

    println!("{}\n", engine.render());
    while !engine.is_exhausted() {
        let wave = engine.step()?;
        let cells: Vec<String> = wave.newly_visited.iter().map(Coord::to_string).collect();
        println!("wave {}: {}", wave.wave, cells.join(" "));
        println!("{}\n", engine.render());
    }

    info!(
        "fill complete: {} of {} cells reached in {} waves",
        engine.visited_count(),
        engine.grid().cell_count(),
        engine.current_wave()
    );
    Ok(())
}
