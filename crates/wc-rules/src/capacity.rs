//! Payload left for the workpiece once tool, grippers and addons are mounted.

use wc_catalog::{CobotRating, addon_weight, gripper_info};
use wc_core::{Mass, kg};
use wc_project::{GripperSlot, HardwareConfig};

/// Self weight of the gripper in a slot plus its addons.
///
/// An empty slot weighs nothing. Unknown gripper or addon ids contribute
/// nothing either; they are logged since they usually mean a stale catalog.
pub fn gripper_assembly_weight(hardware: &HardwareConfig, slot: GripperSlot) -> Mass {
    let Some(selection) = hardware.gripper(slot) else {
        return kg(0.0);
    };
    let Some(info) = gripper_info(&selection.supplier_id, &selection.gripper_id) else {
        tracing::warn!(
            ?slot,
            supplier = %selection.supplier_id,
            gripper = %selection.gripper_id,
            "unknown gripper model, assuming no self weight"
        );
        return kg(0.0);
    };

    let addons: f64 = selection
        .addon_ids
        .iter()
        .map(|id| {
            addon_weight(info, id).unwrap_or_else(|| {
                tracing::warn!(?slot, addon = %id, "unknown gripper addon, assuming no weight");
                0.0
            })
        })
        .sum();

    kg(info.weight + addons)
}

/// Net carry weight: `carry_weight_max - tool - grippers - addons`.
///
/// May be negative; range checks compare against this raw value so that an
/// overloaded arm rejects every raw-material weight.
pub fn max_carry_weight(hardware: &HardwareConfig, cobot: CobotRating, tool_weight: Mass) -> Mass {
    kg(cobot.carry_weight_max)
        - tool_weight
        - gripper_assembly_weight(hardware, GripperSlot::First)
        - gripper_assembly_weight(hardware, GripperSlot::Second)
}

/// Carry weight for range display, never below zero.
pub fn display_max_carry_weight(
    hardware: &HardwareConfig,
    cobot: CobotRating,
    tool_weight: Mass,
) -> Mass {
    let raw = max_carry_weight(hardware, cobot, tool_weight);
    if raw < kg(0.0) { kg(0.0) } else { raw }
}
