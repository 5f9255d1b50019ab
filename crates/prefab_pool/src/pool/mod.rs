//! Object pooling
//!
//! Pre-allocated, per-kind pools of reusable instances plus the registry that
//! routes lease and return calls to them.
//!
//! # Architecture
//!
//! ```text
//! PoolRegistry
//!     ├── pools:  Kind → ResourcePool (idle FIFO + prototype)
//!     └── leased: Instance → Kind
//!                     ↓
//!               PoolHost (instantiate, activate, place, parent)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut registry = PoolRegistry::initialize(&mut scene, vec![
//!     PoolDescriptor::new("bullet", bullet_prototype, 32),
//! ])?;
//!
//! let bullet = registry.get(&mut scene, &"bullet", Placement::at(muzzle, aim))?;
//! // ...
//! registry.return_instance(&mut scene, &bullet, None)?;
//! ```

mod error;
mod host;
mod placement;
mod registry;
mod resource_pool;
mod stats;

#[cfg(test)]
mod tests;

pub use error::PoolError;
pub use host::PoolHost;
pub use placement::Placement;
pub use registry::{PoolDescriptor, PoolRegistry};
pub use resource_pool::ResourcePool;
pub use stats::{PoolStats, RegistryStats};
