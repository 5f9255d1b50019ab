//! Pool demo application
//!
//! Loads pool sizes from a config file (default `pool_demo/pools.toml`),
//! fires a burst of bullets that outgrows the bullet pool, and returns them.

use prefab_pool::foundation::logging;
use prefab_pool::prelude::*;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "pool_demo/pools.toml";

/// Errors surfaced by the demo
#[derive(Debug, Error)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),
}

fn run(config_path: &str) -> Result<(), DemoError> {
    log::info!("Loading pool settings from {}", config_path);
    let settings = PoolSettings::load_from_file(config_path)?;
    log::info!(
        "Configured {} pools with {} pre-warmed instances",
        settings.pools.len(),
        settings.total_initial_capacity()
    );

    let mut scene = Scene::new();
    let descriptors = settings.descriptors(|kind| Prototype::named(kind))?;
    let mut pools: PoolRegistry<String, Scene> = PoolRegistry::initialize(&mut scene, descriptors)?;

    let turret = scene.create_node("turret");
    let spent = scene.create_node("spent");

    let mut bullets = Vec::new();
    for shot in 0..3u8 {
        let offset = f32::from(shot);
        let placement = Placement::at(Vec3::new(offset, 0.5, 0.0), Quat::identity()).with_parent(turret);
        bullets.push(pools.get(&mut scene, "bullet", placement)?);
    }
    log::info!(
        "Fired {} bullets, {} idle left, {} active nodes",
        bullets.len(),
        pools.idle_count("bullet").unwrap_or(0),
        scene.active_count()
    );

    let explosion = pools.get_at(&mut scene, "explosion", Vec3::new(2.0, 0.5, 0.0), Quat::identity())?;
    pools.return_instance(&mut scene, &explosion, None)?;

    for bullet in &bullets {
        pools.return_instance(&mut scene, bullet, Some(&spent))?;
    }

    let stats = pools.stats();
    log::info!(
        "Done: {} pools, {} idle, {} leased, {} created ({} from growth)",
        stats.pools,
        stats.idle,
        stats.leased,
        stats.created,
        stats.grown
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    run(&config_path)?;

    log::info!("Pool demo finished");
    Ok(())
}
