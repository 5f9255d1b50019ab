//! Foundation module - Core utilities and types
//!
//! Shared building blocks used by the pool and scene layers:
//! - Math types for placement (position, rotation, scale)
//! - Logging setup

pub mod math;
pub mod logging;
