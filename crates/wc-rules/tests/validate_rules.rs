mod common;

use common::*;
use wc_project::*;
use wc_rules::*;

#[test]
fn fixture_product_is_valid() {
    let hw = hardware();
    let tree = validate_product(&product(&hw), &ctx(&hw));
    assert!(tree.is_empty(), "{tree:?}");
}

#[test]
fn validation_is_pure() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.raw_material_diameter = "abc".to_string();
    p.config.force_infeed = true;
    let first = validate_product(&p, &ctx(&hw));
    let second = validate_product(&p, &ctx(&hw));
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn force_newton_range_only_when_enabled() {
    let hw = hardware();
    let mut p = product(&hw);

    p.config.force_feeding_newton = "4".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(Field::ForceFeedingNewton).is_none());

    p.config.force_infeed = true;
    let tree = validate_product(&p, &ctx(&hw));
    assert_eq!(
        tree.get(Field::ForceFeedingNewton),
        Some(&[FieldError::NumberBetween { min: 5.0, max: 80.0 }][..])
    );

    p.config.force_feeding_newton = "5".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(Field::ForceFeedingNewton).is_none());

    p.config.force_feeding_newton = "81".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(Field::ForceFeedingNewton).is_some());

    p.config.force_feeding_newton = String::new();
    assert!(
        validate_product(&p, &ctx(&hw)).contains(Field::ForceFeedingNewton, &FieldError::Required)
    );
}

#[test]
fn serialized_errors_carry_name_and_label() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.force_infeed = true;
    p.config.force_feeding_newton = "4".to_string();

    let json = serde_json::to_value(validate_product(&p, &ctx(&hw))).unwrap();
    let entry = &json["FORCE_FEEDING_NEWTON"][0];
    assert_eq!(entry["type"], "NUMBER_BETWEEN");
    assert_eq!(entry["name"], "FORCE_FEEDING_NEWTON");
    assert_eq!(entry["label"], Field::ForceFeedingNewton.label());
    assert_eq!(entry["min"], 5.0);
    assert_eq!(entry["max"], 80.0);
}

#[test]
fn static_grid_limits_product_counts() {
    let hw = hardware();
    let mut p = product(&hw);
    let field = Field::Drawer(DrawerSlot::Main, DrawerField::AmountProductX);

    p.config.main_drawer.amount_product_x = "6".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(field, &FieldError::NumberBetween { min: 1.0, max: 5.0 }));

    p.config.main_drawer.amount_product_x = "5".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(field).is_none());

    p.config.main_drawer.amount_product_x = "0".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(field).is_some());
}

#[test]
fn selected_grid_layout_drives_count_limit() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.main_drawer.static_grid_index = "1".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(
        Field::Drawer(DrawerSlot::Main, DrawerField::AmountProductY),
        &FieldError::NumberBetween { min: 1.0, max: 3.0 }
    ));

    p.config.main_drawer.static_grid_index = "2".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(
        Field::Drawer(DrawerSlot::Main, DrawerField::StaticGridIndex),
        &FieldError::IndexOutOfRange { len: 2 }
    ));
    assert!(tree
        .get(Field::Drawer(DrawerSlot::Main, DrawerField::AmountProductX))
        .is_none());
}

#[test]
fn pinned_grid_counts_are_unconstrained() {
    let hw = pro_feeder_hardware();
    let mut p = product(&hw);
    p.config.main_drawer.amount_product_x = "99".to_string();
    p.config.main_drawer.static_grid_index = "7".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.get(Field::Drawer(DrawerSlot::Main, DrawerField::AmountProductX)).is_none());
    assert!(tree.get(Field::Drawer(DrawerSlot::Main, DrawerField::StaticGridIndex)).is_none());

    p.config.main_drawer.amount_product_x = "many".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(
        Field::Drawer(DrawerSlot::Main, DrawerField::AmountProductX),
        &FieldError::NotANumber
    ));
}

#[test]
fn lathe_requires_first_pick_position() {
    let mut hw = hardware();
    hw.machine_type = MachineType::Lathe;
    let mut p = product(&hw);

    p.config.machine_pick_position_index = "1".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert_eq!(
        tree.get(Field::MachinePickPositionIndex),
        Some(&[FieldError::LatheRequiresFirstMachinePickPosition][..])
    );

    p.config.machine_pick_position_index = "0".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(Field::MachinePickPositionIndex).is_none());
}

#[test]
fn lathe_place_position_is_fixed_too() {
    let mut hw = hardware();
    hw.machine_type = MachineType::Lathe;
    let mut p = product(&hw);
    p.config.machine_pick_position_index = "0".to_string();
    p.config.machine_place_position_index = "1".to_string();

    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(
        Field::MachinePlacePositionIndex,
        &FieldError::LatheRequiresFirstMachinePickPosition
    ));

    p.config.force_lathe_positions(hw.machine_type);
    assert!(validate_product(&p, &ctx(&hw)).is_empty());
}

#[test]
fn lathe_first_position_needs_no_named_positions() {
    let mut hw = hardware();
    hw.machine_type = MachineType::Lathe;
    hw.machine_positions.clear();
    let mut p = product(&hw);
    p.config.force_lathe_positions(hw.machine_type);

    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.get(Field::MachinePickPositionIndex).is_none());
    assert!(tree.get(Field::MachinePlacePositionIndex).is_none());

    p.config.machine_pick_position_index = String::new();
    assert!(
        validate_product(&p, &ctx(&hw))
            .contains(Field::MachinePickPositionIndex, &FieldError::Required)
    );
}

#[test]
fn mill_pick_index_must_exist() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.machine_pick_position_index = "2".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert_eq!(
        tree.get(Field::MachinePickPositionIndex),
        Some(&[FieldError::IndexOutOfRange { len: 2 }][..])
    );
}

#[test]
fn second_drawer_and_drop_off_are_exclusive() {
    let hw = hardware();

    let mut drawer_first = product(&hw);
    drawer_first.config.place_finished_product_on_second_drawer = true;
    drawer_first.config.place_finished_product_on_drop_off_position = true;
    drawer_first.config.drop_off_position_index = "0".to_string();

    let mut drop_off_first = product(&hw);
    drop_off_first.config.drop_off_position_index = "0".to_string();
    drop_off_first.config.place_finished_product_on_drop_off_position = true;
    drop_off_first.config.place_finished_product_on_second_drawer = true;

    for p in [&drawer_first, &drop_off_first] {
        let tree = validate_product(p, &ctx(&hw));
        assert_eq!(
            tree.get(Field::PlaceFinishedProductOnSecondDrawer),
            Some(&[FieldError::SecondDrawerAndDropOffExclusive][..])
        );
        assert!(tree.get(Field::DropOffPositionIndex).is_none());
    }
}

#[test]
fn second_drawer_needs_supporting_topology() {
    let hw = pro_feeder_hardware();
    let mut p = product(&hw);
    p.config.place_finished_product_on_second_drawer = true;
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(
        Field::PlaceFinishedProductOnSecondDrawer,
        &FieldError::SecondDrawerUnavailable
    ));
}

#[test]
fn second_drawer_fields_only_checked_when_used() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.second_drawer.reach_tested = false;
    p.config.second_drawer.pick_offset_x = "50".to_string();
    assert!(validate_product(&p, &ctx(&hw)).is_empty());

    p.config.place_finished_product_on_second_drawer = true;
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(
        Field::Drawer(DrawerSlot::Second, DrawerField::ReachTested),
        &FieldError::ReachTestRequired
    ));
    assert!(tree.contains(
        Field::Drawer(DrawerSlot::Second, DrawerField::PickOffsetX),
        &FieldError::NumberBetween {
            min: -10.0,
            max: 10.0
        }
    ));
}

#[test]
fn reach_gate() {
    let hw = hardware();
    let field = Field::Drawer(DrawerSlot::Main, DrawerField::ReachTested);
    let mut p = product(&hw);

    p.config.main_drawer.reach_tested = false;
    assert_eq!(
        validate_product(&p, &ctx(&hw)).get(field),
        Some(&[FieldError::ReachTestRequired][..])
    );

    p.config.main_drawer.reach_tested = true;
    p.config.main_drawer.reachable_spots = vec![false; 20];
    assert_eq!(
        validate_product(&p, &ctx(&hw)).get(field),
        Some(&[FieldError::NoSpotCanBeReached][..])
    );

    p.config.main_drawer.reachable_spots[7] = true;
    assert!(validate_product(&p, &ctx(&hw)).get(field).is_none());
}

#[test]
fn hardware_gated_toggles() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.use_second_gripper = true;
    p.config.gripper_2_claw_height = "40".to_string();
    p.config.gripper_2_claw_depth = "10".to_string();
    p.config.use_sub_spindle = true;
    p.config.sub_spindle_claw_height = "40".to_string();
    p.config.sub_spindle_claw_depth = "10".to_string();

    let tree = validate_product(&p, &ctx(&hw));
    assert_eq!(
        tree.get(Field::UseSecondGripper),
        Some(&[FieldError::SecondGripperRequired][..])
    );
    assert_eq!(
        tree.get(Field::UseSubSpindle),
        Some(&[FieldError::SubSpindleRequired][..])
    );
    assert!(tree.get(Field::Gripper2ClawHeight).is_none());
}

#[test]
fn conditional_claws_are_required_when_used() {
    let mut hw = hardware();
    hw.has_second_gripper = true;
    hw.gripper_2 = Some(gripper("pgn-plus-p-80", &[]));
    let mut p = product(&hw);
    assert!(validate_product(&p, &ctx(&hw)).get(Field::Gripper2ClawHeight).is_none());

    p.config.use_second_gripper = true;
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(Field::Gripper2ClawHeight, &FieldError::Required));
    assert!(tree.contains(Field::Gripper2ClawDepth, &FieldError::Required));
    assert!(tree.get(Field::UseSecondGripper).is_none());
}

#[test]
fn claw_ranges() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.gripper_1_claw_height = "9".to_string();
    p.config.main_spindle_claw_depth = "101".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(
        Field::Gripper1ClawHeight,
        &FieldError::NumberBetween {
            min: 10.0,
            max: 150.0
        }
    ));
    assert!(tree.contains(
        Field::MainSpindleClawDepth,
        &FieldError::NumberBetween {
            min: 1.0,
            max: 100.0
        }
    ));
}

#[test]
fn shape_mismatch_is_skipped() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.raw_material_length = "not a number".to_string();
    p.config.finished_product_width = "999".to_string();
    assert!(validate_product(&p, &ctx(&hw)).is_empty());

    p.config.round_product = false;
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.contains(Field::RawMaterialLength, &FieldError::NotANumber));
    assert!(tree.get(Field::RawMaterialDiameter).is_none());
    assert!(tree.get(Field::FinishedProductDiameter).is_none());
}

#[test]
fn finished_dimension_relative_to_raw() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.finished_product_diameter = "41".to_string();
    assert!(validate_product(&p, &ctx(&hw)).contains(
        Field::FinishedProductDiameter,
        &FieldError::NumberAboveZeroUpTo { max: 40.0 }
    ));

    p.config.finished_product_diameter = "0".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(Field::FinishedProductDiameter).is_some());

    p.config.finished_product_diameter = "40".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(Field::FinishedProductDiameter).is_none());

    // Without a usable raw value there is nothing to compare against.
    p.config.raw_material_diameter = "-".to_string();
    p.config.finished_product_diameter = "500".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert!(tree.get(Field::RawMaterialDiameter).is_some());
    assert!(tree.get(Field::FinishedProductDiameter).is_none());
}

#[test]
fn raw_dimension_outside_feeder_envelope() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.raw_material_diameter = "121".to_string();
    p.config.finished_product_diameter = "100".to_string();
    assert!(validate_product(&p, &ctx(&hw)).contains(
        Field::RawMaterialDiameter,
        &FieldError::NumberBetween {
            min: 10.0,
            max: 120.0
        }
    ));
}

#[test]
fn weight_limits() {
    let hw = hardware();
    let mut p = product(&hw);

    // Gripper 1 rating (6 kg) is below the cobot net carry (10.13 kg).
    p.config.raw_material_weight = "6.5".to_string();
    assert!(validate_product(&p, &ctx(&hw)).contains(
        Field::RawMaterialWeight,
        &FieldError::NumberBetween { min: 0.1, max: 6.0 }
    ));

    p.config.raw_material_weight = "0.05".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(Field::RawMaterialWeight).is_some());

    p.config.raw_material_weight = "1.2".to_string();
    p.config.finished_product_weight = "1.3".to_string();
    assert!(validate_product(&p, &ctx(&hw)).contains(
        Field::FinishedProductWeight,
        &FieldError::NumberBetween { min: 0.1, max: 1.2 }
    ));
}

#[test]
fn overloaded_cobot_rejects_every_raw_weight() {
    let hw = hardware();
    let p = product(&hw);
    let small = wc_catalog::CobotRating {
        carry_weight: 2.0,
        carry_weight_max: 2.0,
    };
    let tree = validate_product(&p, &ValidationContext::new(&hw, small, 0.3));
    assert!(tree.get(Field::RawMaterialWeight).is_some());
}

#[test]
fn stepped_axis_offsets() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.fin_top_offset = "garbage".to_string();
    assert!(validate_product(&p, &ctx(&hw)).is_empty());

    p.config.stepped_axis = true;
    p.config.fin_top_offset = "30".to_string();
    p.config.fin_bottom_offset = "29.5".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert_eq!(
        tree.get(Field::FinTopOffset),
        Some(&[FieldError::NumberBetween { min: 0.0, max: 29.5 }][..])
    );
    assert!(tree.get(Field::FinBottomOffset).is_none());

    p.config.fin_top_offset = "-1".to_string();
    assert!(validate_product(&p, &ctx(&hw)).get(Field::FinTopOffset).is_some());
}

#[test]
fn drop_off_index() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.place_finished_product_on_drop_off_position = true;
    assert!(validate_product(&p, &ctx(&hw)).contains(Field::DropOffPositionIndex, &FieldError::Required));

    p.config.drop_off_position_index = "1".to_string();
    assert!(validate_product(&p, &ctx(&hw))
        .contains(Field::DropOffPositionIndex, &FieldError::IndexOutOfRange { len: 1 }));

    p.config.drop_off_position_index = "0".to_string();
    assert!(validate_product(&p, &ctx(&hw)).is_empty());
}

#[test]
fn identity_fields() {
    let hw = hardware();
    let mut p = product(&hw);
    p.name = "x".repeat(101);
    p.description = "y".repeat(256);
    p.icon = "rocket".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert_eq!(tree.get(Field::Name), Some(&[FieldError::MaxLength { max: 100 }][..]));
    assert_eq!(
        tree.get(Field::Description),
        Some(&[FieldError::MaxLength { max: 255 }][..])
    );
    assert_eq!(tree.get(Field::Icon), Some(&[FieldError::InvalidIcon][..]));

    p.name = "  ".to_string();
    p.description = String::new();
    p.icon = String::new();
    let tree = validate_product(&p, &ctx(&hw));
    assert_eq!(tree.get(Field::Name), Some(&[FieldError::Required][..]));
    assert!(tree.get(Field::Description).is_none());
    assert_eq!(tree.get(Field::Icon), Some(&[FieldError::Required][..]));
}

#[test]
fn all_problems_reported_at_once() {
    let hw = hardware();
    let mut p = product(&hw);
    p.config.raw_material_height = String::new();
    p.config.machine_pick_offset_x = "11".to_string();
    p.config.main_drawer.amount_product_y = "9".to_string();
    let tree = validate_product(&p, &ctx(&hw));
    assert_eq!(tree.len(), 3);
    let sections: Vec<FormSection> = tree.fields().map(section_of).collect();
    assert!(sections.contains(&FormSection::Dimensions));
    assert!(sections.contains(&FormSection::Machine));
    assert!(sections.contains(&FormSection::MainDrawer));
}
