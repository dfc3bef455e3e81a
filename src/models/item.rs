use crate::error::DomainError;
use crate::models::types::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bone most hand-held props attach to (right hand).
pub const DEFAULT_PROP_BONE: i64 = 18905;

/// Everything the form knows about a single item.
///
/// One record is alive per editing session. Edits never mutate it in place,
/// see [`ItemRecord::apply`](crate::edit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemRecord {
    /// Unique key (e.g., "water_bottle")
    pub name: String,

    /// Display name (e.g., "Water Bottle")
    pub label: String,

    pub weight: f64,

    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Inventory image file (e.g., "water_bottle.png")
    pub image: String,

    pub description: String,

    pub unique: bool,
    pub useable: bool,
    pub should_close: bool,
    pub stack: bool,
    pub close: bool,
    pub decay: bool,
    pub delete: bool,
    pub durability: bool,

    /// Amount consumed per use
    pub consume: f64,

    /// Decay time in minutes
    pub degrade: f64,

    /// Decay as qb-inventory encodes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qb_decay: Option<f64>,

    /// Weapon only
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ammoname: String,

    /// Weapon only
    #[serde(skip_serializing_if = "String::is_empty")]
    pub damagereason: String,

    /// Ammo only
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ammotype: String,

    pub client: ClientData,
    pub server: ServerData,
    pub buttons: Vec<Button>,
}

impl Default for ItemRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            weight: 0.0,
            item_type: ItemType::Generic,
            image: String::new(),
            description: String::new(),
            unique: false,
            useable: false,
            should_close: true,
            stack: true,
            close: true,
            decay: false,
            delete: false,
            durability: false,
            consume: 0.0,
            degrade: 0.0,
            qb_decay: None,
            ammoname: String::new(),
            damagereason: String::new(),
            ammotype: String::new(),
            client: ClientData::default(),
            server: ServerData::default(),
            buttons: Vec::new(),
        }
    }
}

impl ItemRecord {
    /// Copy and download are only offered once the item has a name and a label.
    pub fn is_exportable(&self) -> bool {
        !self.name.is_empty() && !self.label.is_empty()
    }

    /// Buttons that have both a label and an action, in input order.
    pub fn valid_buttons(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter().filter(|b| b.is_valid())
    }

    /// Image shown by the client: the client override, else the item image.
    pub fn client_image(&self) -> &str {
        if self.client.image.is_empty() {
            &self.image
        } else {
            &self.client.image
        }
    }

    /// True when ox_inventory needs a `client` block for this item.
    pub fn has_client_data(&self) -> bool {
        !self.client_image().is_empty()
            || !self.client.export.is_empty()
            || !self.client.status.is_empty()
            || self.client.anim.as_ref().is_some_and(Anim::is_present)
            || self.client.prop.as_ref().is_some_and(Prop::is_present)
            || self.client.usetime.is_some_and(|t| t > 0)
            || self.client.disable.any()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemType {
    #[default]
    #[serde(rename = "item", alias = "generic")]
    Generic,
    #[serde(rename = "weapon")]
    Weapon,
    #[serde(rename = "ammo")]
    Ammo,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Generic => "item",
            ItemType::Weapon => "weapon",
            ItemType::Ammo => "ammo",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "item" | "generic" => Ok(ItemType::Generic),
            "weapon" => Ok(ItemType::Weapon),
            "ammo" => Ok(ItemType::Ammo),
            _ => Err(DomainError::InvalidValue {
                field: "type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientData {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,

    /// Client export invoked on use (e.g., "my_resource.useItem")
    #[serde(skip_serializing_if = "String::is_empty")]
    pub export: String,

    #[serde(skip_serializing_if = "Status::is_empty")]
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub anim: Option<Anim>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prop: Option<Prop>,

    /// Use duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usetime: Option<u32>,

    #[serde(skip_serializing_if = "Disable::is_empty")]
    pub disable: Disable,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub notification: String,
}

/// Status effects applied on use. Zero means "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hunger: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thirst: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress: Option<i64>,
}

impl Status {
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Set, non-zero effects in output order.
    pub fn entries(&self) -> Vec<(&'static str, i64)> {
        [("hunger", self.hunger), ("thirst", self.thirst), ("stress", self.stress)]
            .into_iter()
            .filter_map(|(k, v)| v.filter(|v| *v != 0).map(|v| (k, v)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Disable {
    #[serde(rename = "move")]
    pub movement: bool,
    pub car: bool,
    pub combat: bool,
    pub mouse: bool,
}

impl Disable {
    pub fn any(&self) -> bool {
        self.movement || self.car || self.combat || self.mouse
    }

    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// Names of the disabled controls in output order.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        [("move", self.movement), ("car", self.car), ("combat", self.combat), ("mouse", self.mouse)]
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(k, _)| k)
            .collect()
    }
}

/// Use animation: either a named ox_inventory animation or a dict/clip pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Anim {
    Simple(String),
    Detailed { dict: String, clip: String },
}

impl Anim {
    /// An empty name or dict is the same as no animation.
    pub fn is_present(&self) -> bool {
        match self {
            Anim::Simple(s) => !s.is_empty(),
            Anim::Detailed { dict, .. } => !dict.is_empty(),
        }
    }
}

/// Prop held while using: either a named prop or a full placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prop {
    Simple(String),
    Detailed(PropPlacement),
}

impl Prop {
    pub fn is_present(&self) -> bool {
        match self {
            Prop::Simple(s) => !s.is_empty(),
            Prop::Detailed(p) => !p.model.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropPlacement {
    pub model: String,
    #[serde(default = "default_bone")]
    pub bone: i64,
    #[serde(default)]
    pub pos: Vec3,
    #[serde(default)]
    pub rot: Vec3,
}

fn default_bone() -> i64 {
    DEFAULT_PROP_BONE
}

impl PropPlacement {
    /// Placement for a freshly chosen model: right hand, no offset.
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            bone: DEFAULT_PROP_BONE,
            pos: Vec3::ZERO,
            rot: Vec3::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerData {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub export: String,

    /// Diagnostic message printed server side
    #[serde(skip_serializing_if = "String::is_empty")]
    pub test: String,
}

impl ServerData {
    pub fn is_empty(&self) -> bool {
        self.export.is_empty() && self.test.is_empty()
    }
}

/// Context-menu button shown for the item in ox_inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    pub label: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Button {
    pub fn is_valid(&self) -> bool {
        !self.label.is_empty() && !self.action.is_empty()
    }
}
