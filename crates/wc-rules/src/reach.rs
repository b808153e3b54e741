//! Tracks whether a drawer's recorded reach test still matches the product.
//!
//! A reach test is run outside the engine for the geometry the product had at
//! that moment. Changing anything that moves where the robot has to go
//! (dimensions, drawer offsets, product counts, grid, claws) makes the
//! recorded result stale.

use wc_catalog::GridKind;
use wc_project::{DrawerSlot, HardwareConfig, ProductConfig};

use crate::bounds::squares_for_drawer;

/// What a tracked-field change does to the reach flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyPolicy {
    /// The flag drops to false and a new reach test is needed.
    ForceUntested,
    /// The flag is forced back to true. Deployed behaviour of the main
    /// drawer; kept until product ownership decides whether to unify it with
    /// the second drawer.
    ForceTested,
}

impl DirtyPolicy {
    pub fn for_slot(slot: DrawerSlot) -> Self {
        match slot {
            DrawerSlot::Main => DirtyPolicy::ForceTested,
            DrawerSlot::Second => DirtyPolicy::ForceUntested,
        }
    }

    pub fn flag_on_change(self) -> bool {
        matches!(self, DirtyPolicy::ForceTested)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReachState {
    /// Tracked values equal the last verified snapshot.
    Tested,
    /// A tracked value changed since the last verified snapshot.
    Dirty,
}

/// Values of every field that affects reachability for one drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachSnapshot(Vec<(&'static str, String)>);

impl ReachSnapshot {
    pub fn capture(slot: DrawerSlot, config: &ProductConfig, hardware: &HardwareConfig) -> Self {
        let drawer = config.drawer(slot);
        let mut values: Vec<(&'static str, String)> = vec![
            ("ROUND_PRODUCT", config.round_product.to_string()),
            ("RAW_MATERIAL_DIAMETER", config.raw_material_diameter.clone()),
            ("RAW_MATERIAL_LENGTH", config.raw_material_length.clone()),
            ("RAW_MATERIAL_WIDTH", config.raw_material_width.clone()),
            ("RAW_MATERIAL_HEIGHT", config.raw_material_height.clone()),
            ("FINISHED_PRODUCT_DIAMETER", config.finished_product_diameter.clone()),
            ("FINISHED_PRODUCT_LENGTH", config.finished_product_length.clone()),
            ("FINISHED_PRODUCT_WIDTH", config.finished_product_width.clone()),
            ("FINISHED_PRODUCT_HEIGHT", config.finished_product_height.clone()),
            ("STATIC_GRID_INDEX", drawer.static_grid_index.clone()),
            ("GRID_SQUARES", grid_signature(hardware, slot, config)),
            ("PICK_OFFSET_X", drawer.pick_offset_x.clone()),
            ("PICK_OFFSET_Y", drawer.pick_offset_y.clone()),
            ("PICK_OFFSET_Z", drawer.pick_offset_z.clone()),
            ("PLACE_OFFSET_X", drawer.place_offset_x.clone()),
            ("PLACE_OFFSET_Y", drawer.place_offset_y.clone()),
            ("PLACE_OFFSET_Z", drawer.place_offset_z.clone()),
            ("AMOUNT_PRODUCT_X", drawer.amount_product_x.clone()),
            ("AMOUNT_PRODUCT_Y", drawer.amount_product_y.clone()),
            ("GRIPPER_1_CLAW_HEIGHT", config.gripper_1_claw_height.clone()),
            ("GRIPPER_1_CLAW_DEPTH", config.gripper_1_claw_depth.clone()),
            ("USE_SECOND_GRIPPER", config.use_second_gripper.to_string()),
        ];
        if config.use_second_gripper {
            values.push(("GRIPPER_2_CLAW_HEIGHT", config.gripper_2_claw_height.clone()));
            values.push(("GRIPPER_2_CLAW_DEPTH", config.gripper_2_claw_depth.clone()));
        }
        Self(values)
    }

    /// Names of the tracked values that differ from `other`.
    pub fn changed_fields(&self, other: &ReachSnapshot) -> Vec<&'static str> {
        let mut changed: Vec<&'static str> = self
            .0
            .iter()
            .filter(|(name, value)| other.value(name) != Some(value.as_str()))
            .map(|(name, _)| *name)
            .collect();
        for (name, _) in &other.0 {
            if self.value(name).is_none() {
                changed.push(name);
            }
        }
        changed
    }

    fn value(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

fn grid_signature(hardware: &HardwareConfig, slot: DrawerSlot, config: &ProductConfig) -> String {
    match hardware.effective_grid_kind() {
        GridKind::Pinned => "pinned".to_string(),
        GridKind::Static => match squares_for_drawer(hardware, config.drawer(slot)) {
            Ok(squares) => format!("{}x{}", squares.x, squares.y),
            Err(_) => "unresolved".to_string(),
        },
    }
}

/// Dirty tracking for one drawer of a product being edited.
#[derive(Debug, Clone)]
pub struct ReachTracker {
    slot: DrawerSlot,
    policy: DirtyPolicy,
    baseline: ReachSnapshot,
    state: ReachState,
}

impl ReachTracker {
    /// Start tracking with the stored values as baseline, so a product saved
    /// as tested stays tested until a tracked field changes.
    pub fn mount(slot: DrawerSlot, config: &ProductConfig, hardware: &HardwareConfig) -> Self {
        Self::with_policy(slot, DirtyPolicy::for_slot(slot), config, hardware)
    }

    pub fn with_policy(
        slot: DrawerSlot,
        policy: DirtyPolicy,
        config: &ProductConfig,
        hardware: &HardwareConfig,
    ) -> Self {
        Self {
            slot,
            policy,
            baseline: ReachSnapshot::capture(slot, config, hardware),
            state: ReachState::Tested,
        }
    }

    pub fn slot(&self) -> DrawerSlot {
        self.slot
    }

    pub fn policy(&self) -> DirtyPolicy {
        self.policy
    }

    pub fn state(&self) -> ReachState {
        self.state
    }

    /// Effective reach flag for the current values.
    ///
    /// Once dirty the tracker stays dirty; reverting the fields does not
    /// restore the tested state.
    pub fn observe(&mut self, config: &ProductConfig, hardware: &HardwareConfig) -> bool {
        if self.state == ReachState::Tested {
            let current = ReachSnapshot::capture(self.slot, config, hardware);
            if current != self.baseline {
                tracing::debug!(
                    slot = ?self.slot,
                    changed = ?current.changed_fields(&self.baseline),
                    "reach test went stale"
                );
                self.state = ReachState::Dirty;
            }
        }
        match self.state {
            ReachState::Tested => config.drawer(self.slot).reach_tested,
            ReachState::Dirty => self.policy.flag_on_change(),
        }
    }

    /// Record the outcome of an external reach test: sets the flag and spot
    /// map on the config and takes the current values as the new baseline.
    pub fn mark_tested(
        &mut self,
        config: &mut ProductConfig,
        hardware: &HardwareConfig,
        reachable_spots: Vec<bool>,
    ) {
        let drawer = config.drawer_mut(self.slot);
        drawer.reach_tested = true;
        drawer.reachable_spots = reachable_spots;
        self.baseline = ReachSnapshot::capture(self.slot, config, hardware);
        self.state = ReachState::Tested;
    }
}

/// Reach flag `current` should carry given the config it was last stored
/// with. Stateless form of [`ReachTracker`] for batch re-evaluation.
pub fn resolve_reach_tested(
    slot: DrawerSlot,
    stored: &ProductConfig,
    stored_hardware: &HardwareConfig,
    current: &ProductConfig,
    current_hardware: &HardwareConfig,
) -> bool {
    ReachTracker::mount(slot, stored, stored_hardware).observe(current, current_hardware)
}
