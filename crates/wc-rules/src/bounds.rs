//! Admissible ranges for the physical dimensions of a product.
//!
//! Raw-material limits come from two sources: the machine feed envelope and
//! the feeder envelope for the drawer grid in use. The tighter of the two
//! wins on each side. Finished-product limits are relative to the raw
//! material they are machined from.

use wc_catalog::{GridKind, Range, feeder_envelope, gripper_info, pin_clearance};
use wc_core::{Mass, Real, Tolerances, WcError, WcResult, as_kg, nearly_equal};
use wc_project::{DrawerConfig, GripperSlot, HardwareConfig, ProductConfig, StaticGrid};

use crate::capacity::max_carry_weight;
use crate::parse::parse_count;
use crate::validate::ValidationContext;

/// Lightest part the grippers handle reliably, in kg.
pub const MIN_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends, with [`Tolerances::default`] slack so a
    /// derived limit like `100 - 1.5 - 0.57` still admits the value it is
    /// displayed as. An inverted range contains nothing.
    pub fn contains(&self, v: Real) -> bool {
        let tol = Tolerances::default();
        if self.min > self.max && !nearly_equal(self.min, self.max, tol) {
            return false;
        }
        (v >= self.min || nearly_equal(v, self.min, tol))
            && (v <= self.max || nearly_equal(v, self.max, tol))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Diameter,
    Length,
    Width,
    Height,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Diameter,
        Dimension::Length,
        Dimension::Width,
        Dimension::Height,
    ];

    /// Diameter only describes round products, length and width only
    /// rectangular ones. Height describes both.
    pub fn applies_to(self, round_product: bool) -> bool {
        match self {
            Dimension::Diameter => round_product,
            Dimension::Length | Dimension::Width => !round_product,
            Dimension::Height => true,
        }
    }

    pub fn raw_value(self, config: &ProductConfig) -> &str {
        match self {
            Dimension::Diameter => &config.raw_material_diameter,
            Dimension::Length => &config.raw_material_length,
            Dimension::Width => &config.raw_material_width,
            Dimension::Height => &config.raw_material_height,
        }
    }

    pub fn finished_value(self, config: &ProductConfig) -> &str {
        match self {
            Dimension::Diameter => &config.finished_product_diameter,
            Dimension::Length => &config.finished_product_length,
            Dimension::Width => &config.finished_product_width,
            Dimension::Height => &config.finished_product_height,
        }
    }
}

/// Bounds for a raw-material dimension, `None` when the dimension does not
/// apply to the product shape.
pub fn raw_material_bounds(
    dim: Dimension,
    round_product: bool,
    hardware: &HardwareConfig,
) -> Option<Bounds> {
    if !dim.applies_to(round_product) {
        return None;
    }

    let grid = hardware.effective_grid_kind();
    let envelope = feeder_envelope(hardware.feeder.kind(), hardware.feeder.type_id())
        .map(|f| *f.for_grid(grid));

    // A round part spans both horizontal axes.
    let (machine_max, feeder_range) = match dim {
        Dimension::Height => (hardware.machine_max_height, envelope.map(|e| e.height)),
        Dimension::Length => (hardware.machine_max_length, envelope.map(|e| e.length)),
        Dimension::Width => (hardware.machine_max_width, envelope.map(|e| e.width)),
        Dimension::Diameter => (
            hardware.machine_max_length.min(hardware.machine_max_width),
            envelope.map(|e| Range {
                min: e.length.min.max(e.width.min),
                max: e.length.max.min(e.width.max),
            }),
        ),
    };

    let mut min = feeder_range.map_or(0.0, |r| r.min);
    let max = feeder_range.map_or(machine_max, |r| machine_max.min(r.max));

    let pin = hardware.positioning_pin_diameter;
    if grid == GridKind::Pinned && dim != Dimension::Height && pin > 0.0 {
        min = min.max(pin + pin_clearance(pin));
    }

    Some(Bounds { min, max })
}

/// Upper limit for a finished dimension: the raw dimension itself.
///
/// `None` when the dimension does not apply or the raw value is not a
/// positive number, in which case the finished value has no range to check.
pub fn finished_dimension_limit(dim: Dimension, config: &ProductConfig) -> Option<f64> {
    if !dim.applies_to(config.round_product) {
        return None;
    }
    crate::parse::positive(dim.raw_value(config))
}

/// Rated workpiece weight of the gripper in a slot, if the model is known.
pub fn gripper_carry_weight(hardware: &HardwareConfig, slot: GripperSlot) -> Option<f64> {
    hardware
        .gripper(slot)
        .and_then(|sel| gripper_info(&sel.supplier_id, &sel.gripper_id))
        .map(|info| info.carry_weight)
}

/// Gripper that holds the finished part on the way out.
pub fn finishing_gripper(config: &ProductConfig) -> GripperSlot {
    if config.use_second_gripper {
        GripperSlot::Second
    } else {
        GripperSlot::First
    }
}

/// `[0.1, min(gripper 1 rating, cobot net carry)]`.
pub fn raw_weight_bounds(ctx: &ValidationContext<'_>) -> Bounds {
    let cobot_max: Mass = max_carry_weight(ctx.hardware, ctx.cobot, ctx.tool_weight);
    let gripper_max = gripper_carry_weight(ctx.hardware, GripperSlot::First).unwrap_or(f64::INFINITY);
    Bounds::new(MIN_WEIGHT, gripper_max.min(as_kg(cobot_max)))
}

/// `[0.1, min(raw weight, rating of the finishing gripper)]`, `None` when the
/// raw weight is not a positive number.
pub fn finished_weight_bounds(config: &ProductConfig, hardware: &HardwareConfig) -> Option<Bounds> {
    let raw = crate::parse::positive(&config.raw_material_weight)?;
    let gripper_max =
        gripper_carry_weight(hardware, finishing_gripper(config)).unwrap_or(f64::INFINITY);
    Some(Bounds::new(MIN_WEIGHT, raw.min(gripper_max)))
}

/// Square counts of the static grid a drawer is laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSquares {
    pub x: u32,
    pub y: u32,
}

impl From<&StaticGrid> for GridSquares {
    fn from(grid: &StaticGrid) -> Self {
        Self {
            x: grid.amount_squares_x_axis,
            y: grid.amount_squares_y_axis,
        }
    }
}

impl GridSquares {
    pub fn total(self) -> usize {
        self.x as usize * self.y as usize
    }
}

/// Resolve the squares of a drawer's selected static grid.
///
/// Asking this of a pinned grid is a caller bug: pinned drawers have no
/// squares.
pub fn squares_for_drawer(hardware: &HardwareConfig, drawer: &DrawerConfig) -> WcResult<GridSquares> {
    if hardware.effective_grid_kind() == GridKind::Pinned {
        return Err(WcError::PinnedGridHasNoSquares {
            what: "drawer grid squares",
        });
    }
    let index = parse_count(&drawer.static_grid_index).map_err(|_| WcError::InvalidArg {
        what: "drawer static grid index is not an index",
    })?;
    hardware
        .static_grid(index)
        .map(GridSquares::from)
        .ok_or(WcError::IndexOob {
            what: "static grids",
            index,
            len: hardware.static_grids.len(),
        })
}

pub fn squares_main_drawer(hardware: &HardwareConfig, config: &ProductConfig) -> WcResult<GridSquares> {
    squares_for_drawer(hardware, &config.main_drawer)
}

pub fn squares_second_drawer(
    hardware: &HardwareConfig,
    config: &ProductConfig,
) -> WcResult<GridSquares> {
    squares_for_drawer(hardware, &config.second_drawer)
}
