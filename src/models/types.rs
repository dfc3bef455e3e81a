use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inventory addon a snippet is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// ox_inventory (`data/items.lua`)
    #[default]
    Ox,
    /// qb-inventory, through `qb-core/shared/items.lua`
    Qb,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Ox, Target::Qb];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Ox => "ox",
            Target::Qb => "qb",
        }
    }

    /// Name of the addon as its users know it.
    pub fn label(&self) -> &'static str {
        match self {
            Target::Ox => "ox_inventory",
            Target::Qb => "qb-inventory",
        }
    }

    /// Download file name for an item, e.g. `water_bottle_ox_inventory.lua`.
    pub fn file_name(&self, item_name: &str) -> String {
        format!("{}_{}_inventory.lua", item_name, self.as_str())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ox" | "ox_inventory" => Ok(Target::Ox),
            "qb" | "qb-inventory" | "qb_inventory" => Ok(Target::Qb),
            _ => Err(DomainError::InvalidValue {
                field: "target".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn component_mut<'a>(&self, v: &'a mut Vec3) -> &'a mut f64 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
            Axis::Z => &mut v.z,
        }
    }
}
