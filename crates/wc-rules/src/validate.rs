//! The field validator set.
//!
//! Every rule is a pure function of the product, the hardware, the cobot
//! rating and the tool weight. Rules never stop at the first failure; all
//! problems end up in one [`ErrorTree`].

use wc_catalog::{CobotRating, GridKind};
use wc_core::{Mass, kg};
use wc_project::{
    DrawerSlot, HardwareConfig, MachineType, Product, ProductConfig, ProductIcon,
};

use crate::bounds::{
    Bounds, Dimension, finished_dimension_limit, finished_weight_bounds, raw_material_bounds,
    raw_weight_bounds, squares_for_drawer,
};
use crate::error_tree::{ErrorTree, FieldError};
use crate::field::{DrawerField, Field};
use crate::parse::{count_between, index_within, number_between, parse_count, parse_number};

pub const CLAW_HEIGHT: Bounds = Bounds::new(10.0, 150.0);
pub const CLAW_DEPTH: Bounds = Bounds::new(1.0, 100.0);
pub const OFFSET: Bounds = Bounds::new(-10.0, 10.0);
pub const FORCE_NEWTON: Bounds = Bounds::new(5.0, 80.0);
pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 255;
/// Gap kept between the stepped-axis offset and the bottom of the claw, in mm.
pub const STEPPED_CLAW_CLEARANCE: f64 = 0.5;

/// Everything outside the product a rule may depend on.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub hardware: &'a HardwareConfig,
    pub cobot: CobotRating,
    pub tool_weight: Mass,
}

impl<'a> ValidationContext<'a> {
    pub fn new(hardware: &'a HardwareConfig, cobot: CobotRating, tool_weight_kg: f64) -> Self {
        Self {
            hardware,
            cobot,
            tool_weight: kg(tool_weight_kg),
        }
    }
}

/// Validate a product: identity fields plus its configuration.
pub fn validate_product(product: &Product, ctx: &ValidationContext<'_>) -> ErrorTree {
    let mut tree = ErrorTree::new();
    check_identity(product, &mut tree);
    check_config(&product.config, ctx, &mut tree);
    tree
}

/// Validate a configuration on its own (e.g. while editing).
pub fn validate_config(config: &ProductConfig, ctx: &ValidationContext<'_>) -> ErrorTree {
    let mut tree = ErrorTree::new();
    check_config(config, ctx, &mut tree);
    tree
}

fn check_config(config: &ProductConfig, ctx: &ValidationContext<'_>, tree: &mut ErrorTree) {
    check_dimensions(config, ctx.hardware, tree);
    check_weights(config, ctx, tree);
    check_claws(config, ctx.hardware, tree);
    check_stepped_axis(config, tree);
    check_machine(config, ctx.hardware, tree);
    check_force(config, tree);
    check_placement(config, ctx.hardware, tree);

    check_drawer(DrawerSlot::Main, config, ctx.hardware, tree);
    if config.place_finished_product_on_second_drawer {
        check_drawer(DrawerSlot::Second, config, ctx.hardware, tree);
    }
}

fn check_identity(product: &Product, tree: &mut ErrorTree) {
    if product.name.trim().is_empty() {
        tree.push(Field::Name, FieldError::Required);
    } else if product.name.chars().count() > NAME_MAX_CHARS {
        tree.push(Field::Name, FieldError::MaxLength { max: NAME_MAX_CHARS });
    }

    if product.description.chars().count() > DESCRIPTION_MAX_CHARS {
        tree.push(
            Field::Description,
            FieldError::MaxLength {
                max: DESCRIPTION_MAX_CHARS,
            },
        );
    }

    if product.icon.trim().is_empty() {
        tree.push(Field::Icon, FieldError::Required);
    } else if ProductIcon::parse(&product.icon).is_none() {
        tree.push(Field::Icon, FieldError::InvalidIcon);
    }
}

fn raw_field(dim: Dimension) -> Field {
    match dim {
        Dimension::Diameter => Field::RawMaterialDiameter,
        Dimension::Length => Field::RawMaterialLength,
        Dimension::Width => Field::RawMaterialWidth,
        Dimension::Height => Field::RawMaterialHeight,
    }
}

fn finished_field(dim: Dimension) -> Field {
    match dim {
        Dimension::Diameter => Field::FinishedProductDiameter,
        Dimension::Length => Field::FinishedProductLength,
        Dimension::Width => Field::FinishedProductWidth,
        Dimension::Height => Field::FinishedProductHeight,
    }
}

fn check_dimensions(config: &ProductConfig, hardware: &HardwareConfig, tree: &mut ErrorTree) {
    for dim in Dimension::ALL {
        // Shape mismatch: the field is not shown and never fails.
        if !dim.applies_to(config.round_product) {
            continue;
        }

        if let Some(bounds) = raw_material_bounds(dim, config.round_product, hardware) {
            tree.record(raw_field(dim), number_between(dim.raw_value(config), bounds));
        }

        let finished = tree.record(finished_field(dim), parse_number(dim.finished_value(config)));
        if let (Some(value), Some(max)) = (finished, finished_dimension_limit(dim, config))
            && !(value > 0.0 && value <= max)
        {
            tree.push(finished_field(dim), FieldError::NumberAboveZeroUpTo { max });
        }
    }
}

fn check_weights(config: &ProductConfig, ctx: &ValidationContext<'_>, tree: &mut ErrorTree) {
    tree.record(
        Field::RawMaterialWeight,
        number_between(&config.raw_material_weight, raw_weight_bounds(ctx)),
    );

    let finished = tree.record(
        Field::FinishedProductWeight,
        parse_number(&config.finished_product_weight),
    );
    if let (Some(value), Some(bounds)) = (finished, finished_weight_bounds(config, ctx.hardware))
        && !bounds.contains(value)
    {
        tree.push(
            Field::FinishedProductWeight,
            FieldError::NumberBetween {
                min: bounds.min,
                max: bounds.max,
            },
        );
    }
}

fn check_claw(tree: &mut ErrorTree, height: (Field, &str), depth: (Field, &str)) {
    tree.record(height.0, number_between(height.1, CLAW_HEIGHT));
    tree.record(depth.0, number_between(depth.1, CLAW_DEPTH));
}

fn check_claws(config: &ProductConfig, hardware: &HardwareConfig, tree: &mut ErrorTree) {
    check_claw(
        tree,
        (Field::Gripper1ClawHeight, config.gripper_1_claw_height.as_str()),
        (Field::Gripper1ClawDepth, config.gripper_1_claw_depth.as_str()),
    );
    check_claw(
        tree,
        (Field::MainSpindleClawHeight, config.main_spindle_claw_height.as_str()),
        (Field::MainSpindleClawDepth, config.main_spindle_claw_depth.as_str()),
    );

    if config.use_second_gripper {
        if !hardware.has_second_gripper {
            tree.push(Field::UseSecondGripper, FieldError::SecondGripperRequired);
        }
        check_claw(
            tree,
            (Field::Gripper2ClawHeight, config.gripper_2_claw_height.as_str()),
            (Field::Gripper2ClawDepth, config.gripper_2_claw_depth.as_str()),
        );
    }

    if config.use_sub_spindle {
        if !hardware.has_sub_spindle {
            tree.push(Field::UseSubSpindle, FieldError::SubSpindleRequired);
        }
        check_claw(
            tree,
            (Field::SubSpindleClawHeight, config.sub_spindle_claw_height.as_str()),
            (Field::SubSpindleClawDepth, config.sub_spindle_claw_depth.as_str()),
        );
    }
}

/// Upper bound for a stepped-axis offset held by a claw: what is left of the
/// claw height below the grip depth, minus a clearance.
pub fn stepped_offset_max(claw_height: &str, claw_depth: &str) -> Option<f64> {
    let height = parse_number(claw_height).ok()?;
    let depth = parse_number(claw_depth).ok()?;
    Some(height - depth - STEPPED_CLAW_CLEARANCE)
}

fn check_stepped_axis(config: &ProductConfig, tree: &mut ErrorTree) {
    if !config.stepped_axis {
        return;
    }

    // Top side is held by the gripper carrying the finished part out.
    let top_claw = if config.use_second_gripper {
        (&config.gripper_2_claw_height, &config.gripper_2_claw_depth)
    } else {
        (&config.gripper_1_claw_height, &config.gripper_1_claw_depth)
    };
    // Bottom side is clamped by the spindle doing the last operation.
    let bottom_claw = if config.use_sub_spindle {
        (&config.sub_spindle_claw_height, &config.sub_spindle_claw_depth)
    } else {
        (&config.main_spindle_claw_height, &config.main_spindle_claw_depth)
    };

    for (field, raw, (height, depth)) in [
        (Field::FinTopOffset, &config.fin_top_offset, top_claw),
        (Field::FinBottomOffset, &config.fin_bottom_offset, bottom_claw),
    ] {
        match stepped_offset_max(height, depth) {
            Some(max) => {
                tree.record(field, number_between(raw, Bounds::new(0.0, max)));
            }
            None => {
                tree.record(field, parse_number(raw));
            }
        }
    }
}

fn check_machine(config: &ProductConfig, hardware: &HardwareConfig, tree: &mut ErrorTree) {
    let positions = hardware.machine_positions.len();
    for (field, raw) in [
        (Field::MachinePickPositionIndex, &config.machine_pick_position_index),
        (Field::MachinePlacePositionIndex, &config.machine_place_position_index),
    ] {
        match hardware.machine_type {
            MachineType::Lathe => {
                tree.record(field, lathe_position(raw));
            }
            MachineType::Mill => {
                tree.record(field, index_within(raw, positions));
            }
        }
    }

    for (field, raw) in [
        (Field::MachinePickOffsetX, &config.machine_pick_offset_x),
        (Field::MachinePickOffsetY, &config.machine_pick_offset_y),
        (Field::MachinePickOffsetZ, &config.machine_pick_offset_z),
        (Field::MachinePlaceOffsetX, &config.machine_place_offset_x),
        (Field::MachinePlaceOffsetY, &config.machine_place_offset_y),
        (Field::MachinePlaceOffsetZ, &config.machine_place_offset_z),
    ] {
        tree.record(field, number_between(raw, OFFSET));
    }
}

/// A lathe has a single fixed position: index `0`, whether or not it is
/// listed among the named positions.
fn lathe_position(raw: &str) -> Result<usize, FieldError> {
    match parse_count(raw) {
        Ok(0) => Ok(0),
        Ok(_) => Err(FieldError::LatheRequiresFirstMachinePickPosition),
        Err(e) => Err(e),
    }
}

fn check_force(config: &ProductConfig, tree: &mut ErrorTree) {
    if config.force_infeed {
        tree.record(
            Field::ForceFeedingNewton,
            number_between(&config.force_feeding_newton, FORCE_NEWTON),
        );
    }
    if config.force_outfeed {
        tree.record(
            Field::ForceRemovingNewton,
            number_between(&config.force_removing_newton, FORCE_NEWTON),
        );
    }
}

fn check_placement(config: &ProductConfig, hardware: &HardwareConfig, tree: &mut ErrorTree) {
    if config.place_finished_product_on_drop_off_position {
        tree.record(
            Field::DropOffPositionIndex,
            index_within(
                &config.drop_off_position_index,
                hardware.drop_off_positions.len(),
            ),
        );
    }

    if config.place_finished_product_on_second_drawer {
        if !hardware.supports_second_drawer_placement() {
            tree.push(
                Field::PlaceFinishedProductOnSecondDrawer,
                FieldError::SecondDrawerUnavailable,
            );
        }
        if config.place_finished_product_on_drop_off_position {
            tree.push(
                Field::PlaceFinishedProductOnSecondDrawer,
                FieldError::SecondDrawerAndDropOffExclusive,
            );
        }
    }
}

fn check_drawer(
    slot: DrawerSlot,
    config: &ProductConfig,
    hardware: &HardwareConfig,
    tree: &mut ErrorTree,
) {
    let drawer = config.drawer(slot);
    let field = |f: DrawerField| Field::Drawer(slot, f);

    for (f, raw) in [
        (DrawerField::PickOffsetX, &drawer.pick_offset_x),
        (DrawerField::PickOffsetY, &drawer.pick_offset_y),
        (DrawerField::PickOffsetZ, &drawer.pick_offset_z),
        (DrawerField::PlaceOffsetX, &drawer.place_offset_x),
        (DrawerField::PlaceOffsetY, &drawer.place_offset_y),
        (DrawerField::PlaceOffsetZ, &drawer.place_offset_z),
    ] {
        tree.record(field(f), number_between(raw, OFFSET));
    }

    let counts = [
        (DrawerField::AmountProductX, &drawer.amount_product_x),
        (DrawerField::AmountProductY, &drawer.amount_product_y),
    ];
    match hardware.effective_grid_kind() {
        GridKind::Static => {
            let grid = tree.record(
                field(DrawerField::StaticGridIndex),
                index_within(&drawer.static_grid_index, hardware.static_grids.len()),
            );
            let squares = grid.and_then(|_| squares_for_drawer(hardware, drawer).ok());
            match squares {
                Some(squares) => {
                    for ((f, raw), max) in counts.into_iter().zip([squares.x, squares.y]) {
                        tree.record(field(f), count_between(raw, Bounds::new(1.0, f64::from(max))));
                    }
                }
                None => {
                    for (f, raw) in counts {
                        tree.record(field(f), parse_count(raw));
                    }
                }
            }
        }
        GridKind::Pinned => {
            for (f, raw) in counts {
                tree.record(field(f), parse_count(raw));
            }
        }
    }

    if !drawer.reach_tested {
        tree.push(field(DrawerField::ReachTested), FieldError::ReachTestRequired);
    } else if !drawer.reachable_spots.iter().any(|spot| *spot) {
        tree.push(field(DrawerField::ReachTested), FieldError::NoSpotCanBeReached);
    }
}
