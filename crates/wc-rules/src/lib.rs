//! wc-rules: hardware-aware validation of product configurations.
//!
//! # Architecture
//!
//! - `bounds`: admissible ranges for dimensions and weights
//! - `capacity`: net carry weight of the cobot with grippers mounted
//! - `reach`: dirty tracking of the recorded reach test per drawer
//! - `validate`: the full rule set producing an [`ErrorTree`]
//! - `field`: field identifiers and the form section each belongs to
//!
//! All functions are pure: inputs arrive as parameters, results are returned.
//! Invalid user input is reported as data in the error tree; only contract
//! violations (such as asking for the squares of a pinned grid) return `Err`.

pub mod bounds;
pub mod capacity;
pub mod error_tree;
pub mod field;
pub mod parse;
pub mod reach;
pub mod validate;

pub use bounds::{
    Bounds, Dimension, GridSquares, finished_dimension_limit, finished_weight_bounds,
    raw_material_bounds, raw_weight_bounds, squares_for_drawer, squares_main_drawer,
    squares_second_drawer,
};
pub use capacity::{display_max_carry_weight, gripper_assembly_weight, max_carry_weight};
pub use error_tree::{ErrorTree, FieldError};
pub use field::{DrawerField, Field, FormSection, section_of};
pub use reach::{DirtyPolicy, ReachSnapshot, ReachState, ReachTracker, resolve_reach_tested};
pub use validate::{ValidationContext, validate_config, validate_product};
