//! Headless driver: run the animation for a fixed number of ticks and
//! write the final frame as a standalone SVG document.
//!
//! Usage: render_svg [ticks] [output] [seed]

use dotfield::{source_for_seed, Config, Result, Simulation, SvgSurface};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(600);
    let output = args.next().unwrap_or_else(|| "dotfield.svg".to_string());

    let mut config = Config::default();
    if let Some(seed) = args.next().and_then(|s| s.parse().ok()) {
        config.random_seed = seed;
    }

    let mut rng = source_for_seed(config.random_seed);
    let mut sim = Simulation::new(&config, rng.as_mut())?;
    let mut surface = SvgSurface::new(&config);
    sim.attach(&mut surface, &config);

    sim.start();
    for _ in 0..ticks {
        if !sim.tick(&config) {
            break;
        }
    }
    sim.present(&mut surface, &config);
    sim.stop();

    std::fs::write(&output, surface.document())?;
    println!(
        "wrote {} after {} ticks ({} dots, {} connections)",
        output,
        ticks,
        sim.dots().len(),
        sim.connections().len()
    );
    Ok(())
}
