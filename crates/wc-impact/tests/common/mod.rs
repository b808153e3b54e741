#![allow(dead_code)]

use wc_catalog::{CobotRating, GridKind};
use wc_impact::ImpactInput;
use wc_project::*;

pub const COBOT: CobotRating = CobotRating {
    carry_weight: 10.0,
    carry_weight_max: 12.5,
};

pub const TOOL_WEIGHT: f64 = 0.3;

fn grid(x: u32, y: u32) -> StaticGrid {
    StaticGrid {
        name: format!("{x}x{y}"),
        amount_squares_x_axis: x,
        amount_squares_y_axis: y,
    }
}

fn position(name: &str) -> NamedPosition {
    NamedPosition {
        name: name.to_string(),
    }
}

/// Mill with an EasyLoader S on a 5x4 and a 3x3 static grid.
pub fn hardware() -> HardwareConfig {
    HardwareConfig {
        machine_type: MachineType::Mill,
        has_sub_spindle: false,
        machine_max_height: 200.0,
        machine_max_length: 200.0,
        machine_max_width: 200.0,
        feeder: FeederConfig::EasyLoader {
            type_id: "el-s".to_string(),
            drawer_count: 6,
            has_second_drawer: true,
        },
        grid_kind: GridKind::Static,
        positioning_pin_diameter: 0.0,
        static_grids: vec![grid(5, 4), grid(3, 3)],
        gripper_1: Some(GripperSelection {
            supplier_id: "schunk".to_string(),
            gripper_id: "pgn-plus-p-100".to_string(),
            addon_ids: Vec::new(),
        }),
        has_second_gripper: false,
        gripper_2: None,
        machine_positions: vec![position("Vise"), position("Chuck")],
        drop_off_positions: vec![position("Bin")],
    }
}

/// A round part that passes every rule on [`hardware`].
pub fn product(name: &str, hw: &HardwareConfig) -> Product {
    let mut product = Product::new(name, ProductIcon::Shaft, hw);
    let c = &mut product.config;
    c.raw_material_diameter = "40".to_string();
    c.raw_material_height = "50".to_string();
    c.raw_material_weight = "1.2".to_string();
    c.finished_product_diameter = "38".to_string();
    c.finished_product_height = "48".to_string();
    c.finished_product_weight = "1.0".to_string();
    c.main_drawer.amount_product_x = "5".to_string();
    c.main_drawer.amount_product_y = "4".to_string();
    c.main_drawer.reach_tested = true;
    c.main_drawer.reachable_spots = vec![true; 20];
    c.machine_place_position_index = "1".to_string();
    product
}

pub fn input<'a>(
    prev: &'a HardwareConfig,
    next: &'a HardwareConfig,
    products: &'a [Product],
) -> ImpactInput<'a> {
    ImpactInput {
        prev_hardware: prev,
        next_hardware: next,
        cobot: COBOT,
        tool_weight: TOOL_WEIGHT,
        products,
    }
}
