//! Projection of a product configuration onto new hardware.

use wc_catalog::GridKind;
use wc_project::{DrawerConfig, DrawerSlot, HardwareConfig, ProductConfig};
use wc_rules::{GridSquares, squares_for_drawer};

/// Rewrite the hardware-dependent parts of `config` for `next`.
///
/// Only fields whose meaning depends on the hardware are touched:
/// - a drawer grid index that no longer resolves to the layout it had under
///   `prev` is reset to the first grid
/// - on a lathe both machine position indices are forced to the first one
/// - a reachable-spot map whose length no longer matches the square count
///   is replaced by an all-false map of the right length
pub fn resync_config(
    config: &ProductConfig,
    prev: &HardwareConfig,
    next: &HardwareConfig,
) -> ProductConfig {
    let mut synced = config.clone();
    for slot in [DrawerSlot::Main, DrawerSlot::Second] {
        resync_drawer(synced.drawer_mut(slot), prev, next);
    }
    synced.force_lathe_positions(next.machine_type);
    synced
}

fn resync_drawer(drawer: &mut DrawerConfig, prev: &HardwareConfig, next: &HardwareConfig) {
    if next.effective_grid_kind() == GridKind::Pinned {
        return;
    }

    let before = layout(prev, drawer);
    let after = layout(next, drawer);
    if after.is_none() || after != before {
        drawer.static_grid_index = "0".to_string();
    }

    let Some(squares) = layout(next, drawer) else {
        return;
    };
    if drawer.reachable_spots.len() != squares.total() {
        drawer.reachable_spots = vec![false; squares.total()];
    }
}

fn layout(hardware: &HardwareConfig, drawer: &DrawerConfig) -> Option<GridSquares> {
    squares_for_drawer(hardware, drawer).ok()
}
