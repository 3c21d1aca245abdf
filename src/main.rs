use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::info;

use grid_astar::config::Config;
use grid_astar::simulation::Simulation;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate().context("invalid configuration")?;

    info!(
        "Grid size: {}x{}, obstacle draws: {}, algorithm: {}",
        config.width, config.height, config.num_obstacles, config.algorithm
    );
    if config.no_visualization {
        info!("Visualization disabled - running in fast mode");
    } else {
        info!("Visualization enabled with {}ms delay", config.delay_ms);
    }

    let verify = config.verify;
    let mut simulation = Simulation::new(config).context("failed to set up simulation")?;
    info!("Environment seed: {} (for reproducibility)", simulation.environment().seed);

    let (path, mut stats) = simulation.plan().context("path query rejected")?;

    if verify {
        let expected = simulation
            .reference_cost()
            .context("reference query rejected")?;
        ensure!(
            expected == stats.path_cost,
            "path cost {:?} disagrees with reference cost {:?}",
            stats.path_cost,
            expected
        );
        info!("Verified path cost against reference solver");
    }

    let Some(path) = path else {
        println!("No path exists");
        println!("{}", stats);
        return Ok(());
    };

    simulation.walk(&path, &mut stats);

    println!("\n=== FINAL RESULTS ===");
    println!("{}", stats);
    println!("Number of steps: {}", stats.steps_taken);
    Ok(())
}
