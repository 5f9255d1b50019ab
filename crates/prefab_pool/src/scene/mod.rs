//! Reference scene host
//!
//! A minimal scene graph of named nodes with a local transform, an active
//! flag and an optional parent. It implements [`PoolHost`](crate::pool::PoolHost)
//! so pools can be driven without a full engine behind them.

mod prototype;
mod scene_graph;

pub use prototype::Prototype;
pub use scene_graph::{NodeId, Scene, SceneNode};
