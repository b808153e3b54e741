//! Hardware configuration schema.

use serde::{Deserialize, Serialize};
use wc_catalog::{CobotModel, FeederKind, GridKind};

use crate::product::Product;

/// A cell file: the hardware singleton, robot telemetry snapshot and products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CellFile {
    pub hardware: HardwareConfig,
    pub cobot: CobotModel,
    /// Tool weight reported by the robot controller, in kg
    #[serde(default)]
    pub tool_weight: f64,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MachineType {
    Lathe,
    Mill,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct HardwareConfig {
    pub machine_type: MachineType,
    #[serde(default)]
    pub has_sub_spindle: bool,
    pub machine_max_height: f64,
    pub machine_max_length: f64,
    pub machine_max_width: f64,
    pub feeder: FeederConfig,
    pub grid_kind: GridKind,
    #[serde(default)]
    pub positioning_pin_diameter: f64,
    #[serde(default)]
    pub static_grids: Vec<StaticGrid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gripper_1: Option<GripperSelection>,
    #[serde(default)]
    pub has_second_gripper: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gripper_2: Option<GripperSelection>,
    #[serde(default)]
    pub machine_positions: Vec<NamedPosition>,
    #[serde(default)]
    pub drop_off_positions: Vec<NamedPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "KIND", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeederConfig {
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    EasyLoader {
        type_id: String,
        drawer_count: u32,
        #[serde(default)]
        has_second_drawer: bool,
    },
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    ProFeeder { type_id: String, drawer_count: u32 },
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    MetaLoader { type_id: String },
}

impl FeederConfig {
    pub fn kind(&self) -> FeederKind {
        match self {
            FeederConfig::EasyLoader { .. } => FeederKind::EasyLoader,
            FeederConfig::ProFeeder { .. } => FeederKind::ProFeeder,
            FeederConfig::MetaLoader { .. } => FeederKind::MetaLoader,
        }
    }

    pub fn type_id(&self) -> &str {
        match self {
            FeederConfig::EasyLoader { type_id, .. }
            | FeederConfig::ProFeeder { type_id, .. }
            | FeederConfig::MetaLoader { type_id } => type_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StaticGrid {
    pub name: String,
    pub amount_squares_x_axis: u32,
    pub amount_squares_y_axis: u32,
}

impl StaticGrid {
    pub fn square_count(&self) -> usize {
        self.amount_squares_x_axis as usize * self.amount_squares_y_axis as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GripperSelection {
    pub supplier_id: String,
    pub gripper_id: String,
    #[serde(default)]
    pub addon_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NamedPosition {
    pub name: String,
}

impl HardwareConfig {
    /// Grid kind the drawers actually use.
    ///
    /// A ProFeeder always runs pinned drawers, whatever the stored flag says.
    pub fn effective_grid_kind(&self) -> GridKind {
        match self.feeder {
            FeederConfig::ProFeeder { .. } => GridKind::Pinned,
            _ => self.grid_kind,
        }
    }

    pub fn has_second_drawer(&self) -> bool {
        matches!(
            self.feeder,
            FeederConfig::EasyLoader {
                has_second_drawer: true,
                ..
            }
        )
    }

    /// Placing finished products on a second drawer needs an EasyLoader with a
    /// second drawer on a static grid.
    pub fn supports_second_drawer_placement(&self) -> bool {
        self.feeder.kind() == FeederKind::EasyLoader
            && self.effective_grid_kind() == GridKind::Static
            && self.has_second_drawer()
    }

    pub fn static_grid(&self, index: usize) -> Option<&StaticGrid> {
        self.static_grids.get(index)
    }

    /// Gripper selected for a slot; slot 2 only counts when the cell has one.
    pub fn gripper(&self, slot: GripperSlot) -> Option<&GripperSelection> {
        match slot {
            GripperSlot::First => self.gripper_1.as_ref(),
            GripperSlot::Second if self.has_second_gripper => self.gripper_2.as_ref(),
            GripperSlot::Second => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GripperSlot {
    First,
    Second,
}
