#![allow(dead_code)]

use wc_catalog::{CobotRating, GridKind};
use wc_project::*;
use wc_rules::ValidationContext;

pub const COBOT: CobotRating = CobotRating {
    carry_weight: 10.0,
    carry_weight_max: 12.5,
};

pub fn gripper(gripper_id: &str, addons: &[&str]) -> GripperSelection {
    GripperSelection {
        supplier_id: "schunk".to_string(),
        gripper_id: gripper_id.to_string(),
        addon_ids: addons.iter().map(|a| a.to_string()).collect(),
    }
}

/// Mill with an EasyLoader S (second drawer fitted) on static grids.
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
        static_grids: vec![
            StaticGrid {
                name: "5x4".to_string(),
                amount_squares_x_axis: 5,
                amount_squares_y_axis: 4,
            },
            StaticGrid {
                name: "3x3".to_string(),
                amount_squares_x_axis: 3,
                amount_squares_y_axis: 3,
            },
        ],
        gripper_1: Some(gripper("pgn-plus-p-100", &["steel-fingers"])),
        has_second_gripper: false,
        gripper_2: None,
        machine_positions: vec![
            NamedPosition {
                name: "Vise".to_string(),
            },
            NamedPosition {
                name: "Chuck".to_string(),
            },
        ],
        drop_off_positions: vec![NamedPosition {
            name: "Bin".to_string(),
        }],
    }
}

pub fn pro_feeder_hardware() -> HardwareConfig {
    HardwareConfig {
        feeder: FeederConfig::ProFeeder {
            type_id: "pf-300".to_string(),
            drawer_count: 10,
        },
        ..hardware()
    }
}

/// A round product that passes every rule on [`hardware`].
pub fn product(hw: &HardwareConfig) -> Product {
    let mut product = Product::new("Shaft 40", ProductIcon::Shaft, hw);
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
    c.second_drawer = c.main_drawer.clone();
    c.machine_place_position_index = "1".to_string();
    product
}

pub fn ctx(hw: &HardwareConfig) -> ValidationContext<'_> {
    ValidationContext::new(hw, COBOT, 0.3)
}
