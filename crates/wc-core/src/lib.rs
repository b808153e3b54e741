//! wc-core: shared foundation for the work-cell configuration engine.
//!
//! Contains:
//! - units (uom mass type + kilogram constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (programmer-contract errors shared by every crate)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{WcError, WcResult};
pub use numeric::*;
pub use units::*;
