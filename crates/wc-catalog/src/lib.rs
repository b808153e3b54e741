//! wc-catalog: static reference data for work-cell hardware.
//!
//! Gripper suppliers/models/addons, feeder size envelopes and cobot
//! carry-weight ratings. All tables are read-only; lookups of unknown ids
//! return `None` and callers treat that as "no constraint from this source".

pub mod cobot;
pub mod feeder;
pub mod gripper;

pub use cobot::{CobotModel, CobotRating, cobot_rating};
pub use feeder::{
    Envelope, FeederEnvelope, FeederKind, GridKind, Range, feeder_envelope, feeder_types,
    pin_clearance,
};
pub use gripper::{AddonEntry, GripperInfo, addon_weight, gripper_info, grippers_of_supplier};
