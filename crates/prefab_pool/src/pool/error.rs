//! Pool error types

use thiserror::Error;

/// Errors reported by the pool registry
///
/// Kinds and instances are rendered with `Debug` so the error type stays
/// independent of the host's associated types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// No pool is registered for the requested kind
    #[error("No pool registered for kind {kind}")]
    UnknownKind {
        /// Requested kind
        kind: String,
    },

    /// The instance is not currently leased from any pool
    #[error("Instance {instance} is not leased (never obtained from a pool, or already returned)")]
    NotLeased {
        /// Offending instance
        instance: String,
    },

    /// The same kind was listed twice at initialization
    #[error("Kind {kind} is configured more than once")]
    DuplicateKind {
        /// Repeated kind
        kind: String,
    },

    /// The host produced an instance that is already out on lease
    ///
    /// Reported before the instance is placed or counted, so the live lease is
    /// left as it was.
    #[error("Instance {instance} is already leased; the host handed out a live instance twice")]
    AlreadyLeased {
        /// Offending instance
        instance: String,
    },
}

impl PoolError {
    pub(crate) fn unknown_kind(kind: &impl std::fmt::Debug) -> Self {
        Self::UnknownKind { kind: format!("{kind:?}") }
    }

    pub(crate) fn not_leased(instance: &impl std::fmt::Debug) -> Self {
        Self::NotLeased { instance: format!("{instance:?}") }
    }

    pub(crate) fn duplicate_kind(kind: &impl std::fmt::Debug) -> Self {
        Self::DuplicateKind { kind: format!("{kind:?}") }
    }

    pub(crate) fn already_leased(instance: &impl std::fmt::Debug) -> Self {
        Self::AlreadyLeased { instance: format!("{instance:?}") }
    }
}
