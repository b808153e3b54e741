//! wc-impact: what a hardware reconfiguration does to the stored products.
//!
//! Each product is first re-synced to the new hardware (grid indices,
//! lathe positions, reach maps), then validated against it. The outcome
//! sorts every product into one of three buckets so the caller can ask
//! the operator for confirmation before the change is committed.

pub mod impact;
pub mod resync;

pub use impact::{
    Bucket, ImpactInput, ImpactReport, ProductImpact, analyze_hardware_change, apply_impact,
};
pub use resync::resync_config;
