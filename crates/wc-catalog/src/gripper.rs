/// An optional attachment mounted on a gripper (finger sets, quick changers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddonEntry {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Self weight in kg
    pub weight: f64,
}

/// Gripper model data as published by the supplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GripperInfo {
    pub supplier_id: &'static str,
    pub gripper_id: &'static str,
    pub display_name: &'static str,
    /// Self weight in kg
    pub weight: f64,
    /// Maximum workpiece weight the jaws can hold, in kg
    pub carry_weight: f64,
    pub addons: &'static [AddonEntry],
}

const SCHUNK_FINGER_ADDONS: [AddonEntry; 2] = [
    AddonEntry {
        id: "steel-fingers",
        display_name: "Steel finger set",
        weight: 0.57,
    },
    AddonEntry {
        id: "quick-change",
        display_name: "Quick-change adapter",
        weight: 0.3,
    },
];

const ZIMMER_ADDONS: [AddonEntry; 1] = [AddonEntry {
    id: "alu-fingers",
    display_name: "Aluminium finger set",
    weight: 0.25,
}];

const ONROBOT_ADDONS: [AddonEntry; 2] = [
    AddonEntry {
        id: "fingertips",
        display_name: "Custom fingertips",
        weight: 0.1,
    },
    AddonEntry {
        id: "quick-changer",
        display_name: "Quick changer",
        weight: 0.16,
    },
];

const GRIPPER_CATALOG: [GripperInfo; 5] = [
    GripperInfo {
        supplier_id: "schunk",
        gripper_id: "pgn-plus-p-80",
        display_name: "PGN-plus-P 80",
        weight: 1.0,
        carry_weight: 4.0,
        addons: &SCHUNK_FINGER_ADDONS,
    },
    GripperInfo {
        supplier_id: "schunk",
        gripper_id: "pgn-plus-p-100",
        display_name: "PGN-plus-P 100",
        weight: 1.5,
        carry_weight: 6.0,
        addons: &SCHUNK_FINGER_ADDONS,
    },
    GripperInfo {
        supplier_id: "zimmer",
        gripper_id: "gep2016",
        display_name: "GEP2016",
        weight: 0.8,
        carry_weight: 3.0,
        addons: &ZIMMER_ADDONS,
    },
    GripperInfo {
        supplier_id: "onrobot",
        gripper_id: "2fg7",
        display_name: "2FG7",
        weight: 1.1,
        carry_weight: 7.0,
        addons: &ONROBOT_ADDONS,
    },
    GripperInfo {
        supplier_id: "onrobot",
        gripper_id: "rg6",
        display_name: "RG6",
        weight: 1.25,
        carry_weight: 6.0,
        addons: &ONROBOT_ADDONS,
    },
];

pub fn gripper_info(supplier_id: &str, gripper_id: &str) -> Option<&'static GripperInfo> {
    GRIPPER_CATALOG
        .iter()
        .find(|g| g.supplier_id == supplier_id && g.gripper_id == gripper_id)
}

pub fn grippers_of_supplier(supplier_id: &str) -> impl Iterator<Item = &'static GripperInfo> + '_ {
    GRIPPER_CATALOG
        .iter()
        .filter(move |g| g.supplier_id == supplier_id)
}

/// Weight of an addon, only if it is offered for the given gripper.
pub fn addon_weight(info: &GripperInfo, addon_id: &str) -> Option<f64> {
    info.addons
        .iter()
        .find(|a| a.id == addon_id)
        .map(|a| a.weight)
}
