//! Product schema: display metadata, lifecycle and the product configuration.
//!
//! Numeric configuration values are kept as the raw strings typed by the
//! operator. They are parsed by the validation rules, never here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wc_catalog::GridKind;

use crate::schema::{HardwareConfig, MachineType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    pub icon: String,
    pub state: ProductState,
    pub config: ProductConfig,
    #[serde(default)]
    pub history: FabricationHistory,
    #[serde(default)]
    pub iteration: u32,
}

impl Product {
    /// New active product with a configuration derived from the hardware.
    pub fn new(name: impl Into<String>, icon: ProductIcon, hardware: &HardwareConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            color: String::new(),
            icon: icon.as_str().to_string(),
            state: ProductState::Active,
            config: ProductConfig::from_hardware(hardware),
            history: FabricationHistory::default(),
            iteration: 0,
        }
    }

    /// Replace the configuration as a persisted edit.
    pub fn commit_config(&mut self, config: ProductConfig) {
        self.config = config;
        self.iteration += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductState {
    Active,
    Deactivated,
    Invalidated,
}

/// Icons a product can be shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductIcon {
    Gear,
    Shaft,
    Flange,
    Bolt,
    Nut,
    Bushing,
    Disc,
    Block,
    Plate,
    Housing,
}

impl ProductIcon {
    pub const ALL: [ProductIcon; 10] = [
        ProductIcon::Gear,
        ProductIcon::Shaft,
        ProductIcon::Flange,
        ProductIcon::Bolt,
        ProductIcon::Nut,
        ProductIcon::Bushing,
        ProductIcon::Disc,
        ProductIcon::Block,
        ProductIcon::Plate,
        ProductIcon::Housing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductIcon::Gear => "gear",
            ProductIcon::Shaft => "shaft",
            ProductIcon::Flange => "flange",
            ProductIcon::Bolt => "bolt",
            ProductIcon::Nut => "nut",
            ProductIcon::Bushing => "bushing",
            ProductIcon::Disc => "disc",
            ProductIcon::Block => "block",
            ProductIcon::Plate => "plate",
            ProductIcon::Housing => "housing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.as_str() == s)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FabricationHistory {
    pub total_fabricated: u64,
    #[serde(default)]
    pub runs: Vec<FabricationRun>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FabricationRun {
    pub started_at: DateTime<Utc>,
    pub amount: u32,
}

impl FabricationHistory {
    pub fn record_run(&mut self, started_at: DateTime<Utc>, amount: u32) {
        self.total_fabricated += u64::from(amount);
        self.runs.push(FabricationRun { started_at, amount });
    }

    pub fn last_run(&self) -> Option<&FabricationRun> {
        self.runs.iter().max_by_key(|r| r.started_at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IoMode {
    Input,
    Output,
    InputOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrawerSlot {
    Main,
    Second,
}

/// Placement settings for one drawer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DrawerConfig {
    pub static_grid_index: String,
    pub pick_offset_x: String,
    pub pick_offset_y: String,
    pub pick_offset_z: String,
    pub place_offset_x: String,
    pub place_offset_y: String,
    pub place_offset_z: String,
    pub amount_product_x: String,
    pub amount_product_y: String,
    #[serde(default)]
    pub reach_tested: bool,
    /// One entry per grid square, row-major, true when the robot reached it
    #[serde(default)]
    pub reachable_spots: Vec<bool>,
}

impl DrawerConfig {
    pub fn from_hardware(hardware: &HardwareConfig) -> Self {
        let spots = match hardware.effective_grid_kind() {
            GridKind::Static => hardware.static_grid(0).map_or(0, |g| g.square_count()),
            GridKind::Pinned => 0,
        };
        Self {
            static_grid_index: "0".to_string(),
            pick_offset_x: "0".to_string(),
            pick_offset_y: "0".to_string(),
            pick_offset_z: "0".to_string(),
            place_offset_x: "0".to_string(),
            place_offset_y: "0".to_string(),
            place_offset_z: "0".to_string(),
            amount_product_x: "1".to_string(),
            amount_product_y: "1".to_string(),
            reach_tested: false,
            reachable_spots: vec![false; spots],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ProductConfig {
    pub io_mode: IoMode,
    pub round_product: bool,

    pub raw_material_diameter: String,
    pub raw_material_length: String,
    pub raw_material_width: String,
    pub raw_material_height: String,
    pub raw_material_weight: String,
    pub finished_product_diameter: String,
    pub finished_product_length: String,
    pub finished_product_width: String,
    pub finished_product_height: String,
    pub finished_product_weight: String,

    pub gripper_1_claw_height: String,
    pub gripper_1_claw_depth: String,
    pub gripper_2_claw_height: String,
    pub gripper_2_claw_depth: String,
    pub main_spindle_claw_height: String,
    pub main_spindle_claw_depth: String,
    pub sub_spindle_claw_height: String,
    pub sub_spindle_claw_depth: String,
    #[serde(default)]
    pub use_second_gripper: bool,
    #[serde(default)]
    pub use_sub_spindle: bool,

    #[serde(default)]
    pub stepped_axis: bool,
    #[serde(default)]
    pub fin_top_offset: String,
    #[serde(default)]
    pub fin_bottom_offset: String,

    pub main_drawer: DrawerConfig,
    pub second_drawer: DrawerConfig,

    pub machine_pick_position_index: String,
    pub machine_place_position_index: String,
    pub machine_pick_offset_x: String,
    pub machine_pick_offset_y: String,
    pub machine_pick_offset_z: String,
    pub machine_place_offset_x: String,
    pub machine_place_offset_y: String,
    pub machine_place_offset_z: String,

    #[serde(default)]
    pub force_infeed: bool,
    #[serde(default)]
    pub force_feeding_newton: String,
    #[serde(default)]
    pub force_outfeed: bool,
    #[serde(default)]
    pub force_removing_newton: String,

    #[serde(default)]
    pub place_finished_product_on_second_drawer: bool,
    #[serde(default)]
    pub place_finished_product_on_drop_off_position: bool,
    #[serde(default)]
    pub drop_off_position_index: String,
}

impl ProductConfig {
    /// Defaults for a product created on the given hardware.
    pub fn from_hardware(hardware: &HardwareConfig) -> Self {
        let drawer = DrawerConfig::from_hardware(hardware);
        let (claw_height, claw_depth) = ("40".to_string(), "10".to_string());
        Self {
            io_mode: IoMode::InputOutput,
            round_product: true,
            raw_material_diameter: String::new(),
            raw_material_length: String::new(),
            raw_material_width: String::new(),
            raw_material_height: String::new(),
            raw_material_weight: String::new(),
            finished_product_diameter: String::new(),
            finished_product_length: String::new(),
            finished_product_width: String::new(),
            finished_product_height: String::new(),
            finished_product_weight: String::new(),
            gripper_1_claw_height: claw_height.clone(),
            gripper_1_claw_depth: claw_depth.clone(),
            gripper_2_claw_height: String::new(),
            gripper_2_claw_depth: String::new(),
            main_spindle_claw_height: claw_height,
            main_spindle_claw_depth: claw_depth,
            sub_spindle_claw_height: String::new(),
            sub_spindle_claw_depth: String::new(),
            use_second_gripper: false,
            use_sub_spindle: false,
            stepped_axis: false,
            fin_top_offset: String::new(),
            fin_bottom_offset: String::new(),
            main_drawer: drawer.clone(),
            second_drawer: drawer,
            machine_pick_position_index: "0".to_string(),
            machine_place_position_index: "0".to_string(),
            machine_pick_offset_x: "0".to_string(),
            machine_pick_offset_y: "0".to_string(),
            machine_pick_offset_z: "0".to_string(),
            machine_place_offset_x: "0".to_string(),
            machine_place_offset_y: "0".to_string(),
            machine_place_offset_z: "0".to_string(),
            force_infeed: false,
            force_feeding_newton: String::new(),
            force_outfeed: false,
            force_removing_newton: String::new(),
            place_finished_product_on_second_drawer: false,
            place_finished_product_on_drop_off_position: false,
            drop_off_position_index: String::new(),
        }
    }

    pub fn drawer(&self, slot: DrawerSlot) -> &DrawerConfig {
        match slot {
            DrawerSlot::Main => &self.main_drawer,
            DrawerSlot::Second => &self.second_drawer,
        }
    }

    pub fn drawer_mut(&mut self, slot: DrawerSlot) -> &mut DrawerConfig {
        match slot {
            DrawerSlot::Main => &mut self.main_drawer,
            DrawerSlot::Second => &mut self.second_drawer,
        }
    }

    /// Lathes have a single pick/place position.
    pub fn force_lathe_positions(&mut self, machine: MachineType) {
        if machine == MachineType::Lathe {
            self.machine_pick_position_index = "0".to_string();
            self.machine_place_position_index = "0".to_string();
        }
    }
}
