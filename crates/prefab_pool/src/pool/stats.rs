//! Pool statistics for monitoring and capacity tuning

/// Counters for a single pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Instances ever built by this pool (pre-warm included)
    pub created: usize,
    /// Instances built because the idle buffer was empty
    pub grown: usize,
    /// Successful acquisitions
    pub acquired: u64,
    /// Instances put back into the idle buffer (pre-warm included)
    pub released: u64,
}

/// Aggregate view over every pool in a registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Number of registered pools
    pub pools: usize,
    /// Idle instances across all pools
    pub idle: usize,
    /// Instances currently leased
    pub leased: usize,
    /// Instances ever built across all pools
    pub created: usize,
    /// Growth events across all pools
    pub grown: usize,
}
