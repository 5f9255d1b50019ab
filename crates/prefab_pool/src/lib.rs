//! # Prefab Pool
//!
//! Typed object pooling for game objects. Each kind of object gets a pool that
//! is pre-warmed at startup, hands out placed and activated instances, and
//! takes them back deactivated instead of destroying them.
//!
//! ## Features
//!
//! - **Per-kind pools**: FIFO reuse of idle instances, growth with a warning on exhaustion
//! - **Lease tracking**: the registry knows which pool every live instance belongs to
//! - **Pluggable host**: construction and scene state go through [`pool::PoolHost`]
//! - **Config files**: pool sizes from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prefab_pool::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = PoolSettings::load_from_file("pools.toml")?;
//!     let mut scene = Scene::new();
//!     let mut pools: PoolRegistry<String, Scene> =
//!         PoolRegistry::initialize(&mut scene, settings.descriptors(|kind| Prototype::named(kind))?)?;
//!
//!     let bullet = pools.get_at(&mut scene, "bullet", Vec3::new(0.0, 1.0, 0.0), Quat::identity())?;
//!     pools.return_instance(&mut scene, &bullet, None)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod pool;
pub mod scene;

/// Common imports for pool users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PoolSettings},
        foundation::math::{Quat, Transform, Vec3},
        pool::{Placement, PoolDescriptor, PoolError, PoolHost, PoolRegistry, RegistryStats},
        scene::{NodeId, Prototype, Scene},
    };
}
