use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeederKind {
    EasyLoader,
    ProFeeder,
    MetaLoader,
}

/// How products are laid out on a drawer.
///
/// `Static` drawers carry a fixed grid of squares; `Pinned` drawers locate
/// parts against positioning pins and have no discrete squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GridKind {
    Static,
    Pinned,
}

/// Closed interval in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

/// Admissible raw-material size on a drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub height: Range,
    pub length: Range,
    pub width: Range,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeederEnvelope {
    pub kind: FeederKind,
    pub type_id: &'static str,
    pub display_name: &'static str,
    pub static_grid: Envelope,
    pub pinned_grid: Envelope,
}

impl FeederEnvelope {
    pub fn for_grid(&self, grid: GridKind) -> &Envelope {
        match grid {
            GridKind::Static => &self.static_grid,
            GridKind::Pinned => &self.pinned_grid,
        }
    }
}

const fn range(min: f64, max: f64) -> Range {
    Range { min, max }
}

const FEEDER_CATALOG: [FeederEnvelope; 5] = [
    FeederEnvelope {
        kind: FeederKind::EasyLoader,
        type_id: "el-s",
        display_name: "EasyLoader S",
        static_grid: Envelope {
            height: range(10.0, 150.0),
            length: range(10.0, 120.0),
            width: range(10.0, 120.0),
        },
        pinned_grid: Envelope {
            height: range(10.0, 150.0),
            length: range(15.0, 200.0),
            width: range(15.0, 200.0),
        },
    },
    FeederEnvelope {
        kind: FeederKind::EasyLoader,
        type_id: "el-m",
        display_name: "EasyLoader M",
        static_grid: Envelope {
            height: range(10.0, 250.0),
            length: range(10.0, 180.0),
            width: range(10.0, 180.0),
        },
        pinned_grid: Envelope {
            height: range(10.0, 250.0),
            length: range(15.0, 300.0),
            width: range(15.0, 300.0),
        },
    },
    FeederEnvelope {
        kind: FeederKind::ProFeeder,
        type_id: "pf-300",
        display_name: "ProFeeder 300",
        static_grid: Envelope {
            height: range(5.0, 300.0),
            length: range(10.0, 300.0),
            width: range(10.0, 300.0),
        },
        pinned_grid: Envelope {
            height: range(5.0, 300.0),
            length: range(20.0, 400.0),
            width: range(20.0, 400.0),
        },
    },
    FeederEnvelope {
        kind: FeederKind::MetaLoader,
        type_id: "ml-1",
        display_name: "MetaLoader",
        static_grid: Envelope {
            height: range(5.0, 200.0),
            length: range(5.0, 250.0),
            width: range(5.0, 250.0),
        },
        pinned_grid: Envelope {
            height: range(5.0, 200.0),
            length: range(20.0, 350.0),
            width: range(20.0, 350.0),
        },
    },
    FeederEnvelope {
        kind: FeederKind::MetaLoader,
        type_id: "ml-2",
        display_name: "MetaLoader XL",
        static_grid: Envelope {
            height: range(5.0, 350.0),
            length: range(5.0, 400.0),
            width: range(5.0, 400.0),
        },
        pinned_grid: Envelope {
            height: range(5.0, 350.0),
            length: range(20.0, 500.0),
            width: range(20.0, 500.0),
        },
    },
];

pub fn feeder_envelope(kind: FeederKind, type_id: &str) -> Option<&'static FeederEnvelope> {
    FEEDER_CATALOG
        .iter()
        .find(|f| f.kind == kind && f.type_id == type_id)
}

pub fn feeder_types(kind: FeederKind) -> impl Iterator<Item = &'static FeederEnvelope> {
    FEEDER_CATALOG.iter().filter(move |f| f.kind == kind)
}

/// Clearance (mm) that must be added to the positioning pin diameter to get
/// the smallest raw material a pinned drawer can hold.
const PIN_CLEARANCE: [(f64, f64); 4] = [(6.0, 4.0), (8.0, 6.0), (10.0, 8.0), (12.0, 10.0)];
const PIN_CLEARANCE_OVERSIZE: f64 = 14.0;

/// Looks up the clearance for the smallest table pin that is at least
/// `pin_diameter`; pins larger than the table use the oversize clearance.
pub fn pin_clearance(pin_diameter: f64) -> f64 {
    if pin_diameter <= 0.0 {
        return 0.0;
    }
    PIN_CLEARANCE
        .iter()
        .find(|(pin, _)| pin_diameter <= *pin)
        .map(|(_, clearance)| *clearance)
        .unwrap_or(PIN_CLEARANCE_OVERSIZE)
}
