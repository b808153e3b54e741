//! Field identifiers mirroring the product configuration shape, and the
//! form section each field is edited in.

use wc_project::DrawerSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DrawerField {
    StaticGridIndex,
    PickOffsetX,
    PickOffsetY,
    PickOffsetZ,
    PlaceOffsetX,
    PlaceOffsetY,
    PlaceOffsetZ,
    AmountProductX,
    AmountProductY,
    ReachTested,
}

impl DrawerField {
    pub fn key(self) -> &'static str {
        match self {
            DrawerField::StaticGridIndex => "STATIC_GRID_INDEX",
            DrawerField::PickOffsetX => "PICK_OFFSET_X",
            DrawerField::PickOffsetY => "PICK_OFFSET_Y",
            DrawerField::PickOffsetZ => "PICK_OFFSET_Z",
            DrawerField::PlaceOffsetX => "PLACE_OFFSET_X",
            DrawerField::PlaceOffsetY => "PLACE_OFFSET_Y",
            DrawerField::PlaceOffsetZ => "PLACE_OFFSET_Z",
            DrawerField::AmountProductX => "AMOUNT_PRODUCT_X",
            DrawerField::AmountProductY => "AMOUNT_PRODUCT_Y",
            DrawerField::ReachTested => "REACH_TESTED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DrawerField::StaticGridIndex => "grid layout",
            DrawerField::PickOffsetX => "pick offset X",
            DrawerField::PickOffsetY => "pick offset Y",
            DrawerField::PickOffsetZ => "pick offset Z",
            DrawerField::PlaceOffsetX => "place offset X",
            DrawerField::PlaceOffsetY => "place offset Y",
            DrawerField::PlaceOffsetZ => "place offset Z",
            DrawerField::AmountProductX => "products along X",
            DrawerField::AmountProductY => "products along Y",
            DrawerField::ReachTested => "reach test",
        }
    }
}

fn slot_key(slot: DrawerSlot) -> &'static str {
    match slot {
        DrawerSlot::Main => "MAIN_DRAWER",
        DrawerSlot::Second => "SECOND_DRAWER",
    }
}

fn slot_label(slot: DrawerSlot) -> &'static str {
    match slot {
        DrawerSlot::Main => "Main drawer",
        DrawerSlot::Second => "Second drawer",
    }
}

/// A validated field. Drawer fields are nested under their drawer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Description,
    Icon,

    RawMaterialDiameter,
    RawMaterialLength,
    RawMaterialWidth,
    RawMaterialHeight,
    RawMaterialWeight,
    FinishedProductDiameter,
    FinishedProductLength,
    FinishedProductWidth,
    FinishedProductHeight,
    FinishedProductWeight,

    Gripper1ClawHeight,
    Gripper1ClawDepth,
    Gripper2ClawHeight,
    Gripper2ClawDepth,
    MainSpindleClawHeight,
    MainSpindleClawDepth,
    SubSpindleClawHeight,
    SubSpindleClawDepth,
    UseSecondGripper,
    UseSubSpindle,

    FinTopOffset,
    FinBottomOffset,

    Drawer(DrawerSlot, DrawerField),

    MachinePickPositionIndex,
    MachinePlacePositionIndex,
    MachinePickOffsetX,
    MachinePickOffsetY,
    MachinePickOffsetZ,
    MachinePlaceOffsetX,
    MachinePlaceOffsetY,
    MachinePlaceOffsetZ,

    ForceFeedingNewton,
    ForceRemovingNewton,

    PlaceFinishedProductOnSecondDrawer,
    DropOffPositionIndex,
}

impl Field {
    /// Key path in the serialized configuration: a top-level key and, for
    /// drawer fields, the nested key.
    pub fn path(self) -> (&'static str, Option<&'static str>) {
        let top = match self {
            Field::Drawer(slot, field) => return (slot_key(slot), Some(field.key())),
            Field::Name => "NAME",
            Field::Description => "DESCRIPTION",
            Field::Icon => "ICON",
            Field::RawMaterialDiameter => "RAW_MATERIAL_DIAMETER",
            Field::RawMaterialLength => "RAW_MATERIAL_LENGTH",
            Field::RawMaterialWidth => "RAW_MATERIAL_WIDTH",
            Field::RawMaterialHeight => "RAW_MATERIAL_HEIGHT",
            Field::RawMaterialWeight => "RAW_MATERIAL_WEIGHT",
            Field::FinishedProductDiameter => "FINISHED_PRODUCT_DIAMETER",
            Field::FinishedProductLength => "FINISHED_PRODUCT_LENGTH",
            Field::FinishedProductWidth => "FINISHED_PRODUCT_WIDTH",
            Field::FinishedProductHeight => "FINISHED_PRODUCT_HEIGHT",
            Field::FinishedProductWeight => "FINISHED_PRODUCT_WEIGHT",
            Field::Gripper1ClawHeight => "GRIPPER_1_CLAW_HEIGHT",
            Field::Gripper1ClawDepth => "GRIPPER_1_CLAW_DEPTH",
            Field::Gripper2ClawHeight => "GRIPPER_2_CLAW_HEIGHT",
            Field::Gripper2ClawDepth => "GRIPPER_2_CLAW_DEPTH",
            Field::MainSpindleClawHeight => "MAIN_SPINDLE_CLAW_HEIGHT",
            Field::MainSpindleClawDepth => "MAIN_SPINDLE_CLAW_DEPTH",
            Field::SubSpindleClawHeight => "SUB_SPINDLE_CLAW_HEIGHT",
            Field::SubSpindleClawDepth => "SUB_SPINDLE_CLAW_DEPTH",
            Field::UseSecondGripper => "USE_SECOND_GRIPPER",
            Field::UseSubSpindle => "USE_SUB_SPINDLE",
            Field::FinTopOffset => "FIN_TOP_OFFSET",
            Field::FinBottomOffset => "FIN_BOTTOM_OFFSET",
            Field::MachinePickPositionIndex => "MACHINE_PICK_POSITION_INDEX",
            Field::MachinePlacePositionIndex => "MACHINE_PLACE_POSITION_INDEX",
            Field::MachinePickOffsetX => "MACHINE_PICK_OFFSET_X",
            Field::MachinePickOffsetY => "MACHINE_PICK_OFFSET_Y",
            Field::MachinePickOffsetZ => "MACHINE_PICK_OFFSET_Z",
            Field::MachinePlaceOffsetX => "MACHINE_PLACE_OFFSET_X",
            Field::MachinePlaceOffsetY => "MACHINE_PLACE_OFFSET_Y",
            Field::MachinePlaceOffsetZ => "MACHINE_PLACE_OFFSET_Z",
            Field::ForceFeedingNewton => "FORCE_FEEDING_NEWTON",
            Field::ForceRemovingNewton => "FORCE_REMOVING_NEWTON",
            Field::PlaceFinishedProductOnSecondDrawer => "PLACE_FINISHED_PRODUCT_ON_SECOND_DRAWER",
            Field::DropOffPositionIndex => "DROP_OFF_POSITION_INDEX",
        };
        (top, None)
    }

    /// Dotted key, e.g. `MAIN_DRAWER.AMOUNT_PRODUCT_X`.
    pub fn key(self) -> String {
        match self.path() {
            (top, Some(nested)) => format!("{top}.{nested}"),
            (top, None) => top.to_string(),
        }
    }

    pub fn label(self) -> String {
        let label = match self {
            Field::Drawer(slot, field) => {
                return format!("{}: {}", slot_label(slot), field.label());
            }
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Icon => "Icon",
            Field::RawMaterialDiameter => "Raw material diameter",
            Field::RawMaterialLength => "Raw material length",
            Field::RawMaterialWidth => "Raw material width",
            Field::RawMaterialHeight => "Raw material height",
            Field::RawMaterialWeight => "Raw material weight",
            Field::FinishedProductDiameter => "Finished product diameter",
            Field::FinishedProductLength => "Finished product length",
            Field::FinishedProductWidth => "Finished product width",
            Field::FinishedProductHeight => "Finished product height",
            Field::FinishedProductWeight => "Finished product weight",
            Field::Gripper1ClawHeight => "Gripper 1 claw height",
            Field::Gripper1ClawDepth => "Gripper 1 claw depth",
            Field::Gripper2ClawHeight => "Gripper 2 claw height",
            Field::Gripper2ClawDepth => "Gripper 2 claw depth",
            Field::MainSpindleClawHeight => "Main spindle claw height",
            Field::MainSpindleClawDepth => "Main spindle claw depth",
            Field::SubSpindleClawHeight => "Sub spindle claw height",
            Field::SubSpindleClawDepth => "Sub spindle claw depth",
            Field::UseSecondGripper => "Use second gripper",
            Field::UseSubSpindle => "Use sub spindle",
            Field::FinTopOffset => "Finished top offset",
            Field::FinBottomOffset => "Finished bottom offset",
            Field::MachinePickPositionIndex => "Machine pick position",
            Field::MachinePlacePositionIndex => "Machine place position",
            Field::MachinePickOffsetX => "Machine pick offset X",
            Field::MachinePickOffsetY => "Machine pick offset Y",
            Field::MachinePickOffsetZ => "Machine pick offset Z",
            Field::MachinePlaceOffsetX => "Machine place offset X",
            Field::MachinePlaceOffsetY => "Machine place offset Y",
            Field::MachinePlaceOffsetZ => "Machine place offset Z",
            Field::ForceFeedingNewton => "Force feeding threshold",
            Field::ForceRemovingNewton => "Force removing threshold",
            Field::PlaceFinishedProductOnSecondDrawer => "Place finished product on second drawer",
            Field::DropOffPositionIndex => "Drop-off position",
        };
        label.to_string()
    }
}

/// Tab of the product form a field lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormSection {
    General,
    Dimensions,
    Grippers,
    MainDrawer,
    SecondDrawer,
    Machine,
    Placement,
}

pub fn section_of(field: Field) -> FormSection {
    match field {
        Field::Name | Field::Description | Field::Icon => FormSection::General,

        Field::RawMaterialDiameter
        | Field::RawMaterialLength
        | Field::RawMaterialWidth
        | Field::RawMaterialHeight
        | Field::RawMaterialWeight
        | Field::FinishedProductDiameter
        | Field::FinishedProductLength
        | Field::FinishedProductWidth
        | Field::FinishedProductHeight
        | Field::FinishedProductWeight
        | Field::FinTopOffset
        | Field::FinBottomOffset => FormSection::Dimensions,

        Field::Gripper1ClawHeight
        | Field::Gripper1ClawDepth
        | Field::Gripper2ClawHeight
        | Field::Gripper2ClawDepth
        | Field::MainSpindleClawHeight
        | Field::MainSpindleClawDepth
        | Field::SubSpindleClawHeight
        | Field::SubSpindleClawDepth
        | Field::UseSecondGripper
        | Field::UseSubSpindle => FormSection::Grippers,

        Field::Drawer(DrawerSlot::Main, _) => FormSection::MainDrawer,
        Field::Drawer(DrawerSlot::Second, _) => FormSection::SecondDrawer,

        Field::MachinePickPositionIndex
        | Field::MachinePlacePositionIndex
        | Field::MachinePickOffsetX
        | Field::MachinePickOffsetY
        | Field::MachinePickOffsetZ
        | Field::MachinePlaceOffsetX
        | Field::MachinePlaceOffsetY
        | Field::MachinePlaceOffsetZ
        | Field::ForceFeedingNewton
        | Field::ForceRemovingNewton => FormSection::Machine,

        Field::PlaceFinishedProductOnSecondDrawer | Field::DropOffPositionIndex => {
            FormSection::Placement
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_keys_are_nested() {
        let field = Field::Drawer(DrawerSlot::Second, DrawerField::AmountProductX);
        assert_eq!(field.key(), "SECOND_DRAWER.AMOUNT_PRODUCT_X");
        assert_eq!(field.label(), "Second drawer: products along X");
        assert_eq!(section_of(field), FormSection::SecondDrawer);
    }

    #[test]
    fn flat_keys() {
        assert_eq!(Field::ForceFeedingNewton.key(), "FORCE_FEEDING_NEWTON");
        assert_eq!(section_of(Field::ForceFeedingNewton), FormSection::Machine);
        assert_eq!(section_of(Field::Icon), FormSection::General);
    }
}
