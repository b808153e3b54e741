use serde::{Deserialize, Serialize};

/// Cobot arm models supported by the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CobotModel {
    Ur5e,
    Ur10e,
    Ur16e,
    Ur20,
    Ur30,
}

/// Payload rating of a cobot in kilograms.
///
/// `carry_weight` is the nominal rating at the tool flange; `carry_weight_max`
/// is the rating used for limit computation once the center of gravity of the
/// tool is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CobotRating {
    pub carry_weight: f64,
    pub carry_weight_max: f64,
}

impl CobotModel {
    pub const ALL: [CobotModel; 5] = [
        CobotModel::Ur5e,
        CobotModel::Ur10e,
        CobotModel::Ur16e,
        CobotModel::Ur20,
        CobotModel::Ur30,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            CobotModel::Ur5e => "UR5e",
            CobotModel::Ur10e => "UR10e",
            CobotModel::Ur16e => "UR16e",
            CobotModel::Ur20 => "UR20",
            CobotModel::Ur30 => "UR30",
        }
    }
}

pub fn cobot_rating(model: CobotModel) -> CobotRating {
    match model {
        CobotModel::Ur5e => CobotRating {
            carry_weight: 5.0,
            carry_weight_max: 5.0,
        },
        CobotModel::Ur10e => CobotRating {
            carry_weight: 10.0,
            carry_weight_max: 12.5,
        },
        CobotModel::Ur16e => CobotRating {
            carry_weight: 16.0,
            carry_weight_max: 16.0,
        },
        CobotModel::Ur20 => CobotRating {
            carry_weight: 20.0,
            carry_weight_max: 20.0,
        },
        CobotModel::Ur30 => CobotRating {
            carry_weight: 30.0,
            carry_weight_max: 35.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_rating_never_below_nominal() {
        for model in CobotModel::ALL {
            let rating = cobot_rating(model);
            assert!(rating.carry_weight_max >= rating.carry_weight, "{model:?}");
        }
    }
}
