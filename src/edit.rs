//! Edit surface over an [`ItemRecord`].
//!
//! Every edit takes a snapshot and returns a new record; the snapshot is left
//! as it was. Text values are coerced here, at the edit boundary, the same way
//! a numeric form input would: unparsable numbers become 0 or "unset".

use crate::error::{AppResult, DomainError};
use crate::models::item::{Anim, Button, ItemRecord, ItemType, Prop, PropPlacement, DEFAULT_PROP_BONE};
use crate::models::types::Axis;
use crate::presets::Preset;

/// Every field path accepted by [`Field::parse`].
pub const FIELD_PATHS: &[&str] = &[
    "name",
    "label",
    "weight",
    "type",
    "image",
    "description",
    "unique",
    "useable",
    "shouldClose",
    "stack",
    "close",
    "decay",
    "delete",
    "durability",
    "consume",
    "degrade",
    "qbDecay",
    "ammoname",
    "damagereason",
    "ammotype",
    "client.image",
    "client.export",
    "client.notification",
    "client.usetime",
    "client.status.hunger",
    "client.status.thirst",
    "client.status.stress",
    "client.disable.move",
    "client.disable.car",
    "client.disable.combat",
    "client.disable.mouse",
    "client.anim",
    "client.anim.dict",
    "client.anim.clip",
    "client.prop",
    "client.prop.model",
    "client.prop.bone",
    "client.prop.pos.x",
    "client.prop.pos.y",
    "client.prop.pos.z",
    "client.prop.rot.x",
    "client.prop.rot.y",
    "client.prop.rot.z",
    "server.export",
    "server.test",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Unique,
    Useable,
    ShouldClose,
    Stack,
    Close,
    Decay,
    Delete,
    Durability,
    DisableMove,
    DisableCar,
    DisableCombat,
    DisableMouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKey {
    Hunger,
    Thirst,
    Stress,
}

/// Addressable field of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Label,
    Weight,
    Type,
    Image,
    Description,
    Flag(Flag),
    Consume,
    Degrade,
    QbDecay,
    AmmoName,
    DamageReason,
    AmmoType,
    ClientImage,
    ClientExport,
    ClientNotification,
    ClientUsetime,
    Status(StatusKey),
    Anim,
    AnimDict,
    AnimClip,
    Prop,
    PropModel,
    PropBone,
    PropPos(Axis),
    PropRot(Axis),
    ServerExport,
    ServerTest,
}

impl Field {
    pub fn parse(path: &str) -> AppResult<Self> {
        let field = match path {
            "name" => Field::Name,
            "label" => Field::Label,
            "weight" => Field::Weight,
            "type" => Field::Type,
            "image" => Field::Image,
            "description" => Field::Description,
            "unique" => Field::Flag(Flag::Unique),
            "useable" => Field::Flag(Flag::Useable),
            "shouldClose" => Field::Flag(Flag::ShouldClose),
            "stack" => Field::Flag(Flag::Stack),
            "close" => Field::Flag(Flag::Close),
            "decay" => Field::Flag(Flag::Decay),
            "delete" => Field::Flag(Flag::Delete),
            "durability" => Field::Flag(Flag::Durability),
            "consume" => Field::Consume,
            "degrade" => Field::Degrade,
            "qbDecay" => Field::QbDecay,
            "ammoname" => Field::AmmoName,
            "damagereason" => Field::DamageReason,
            "ammotype" => Field::AmmoType,
            "client.image" => Field::ClientImage,
            "client.export" => Field::ClientExport,
            "client.notification" => Field::ClientNotification,
            "client.usetime" => Field::ClientUsetime,
            "client.status.hunger" => Field::Status(StatusKey::Hunger),
            "client.status.thirst" => Field::Status(StatusKey::Thirst),
            "client.status.stress" => Field::Status(StatusKey::Stress),
            "client.disable.move" => Field::Flag(Flag::DisableMove),
            "client.disable.car" => Field::Flag(Flag::DisableCar),
            "client.disable.combat" => Field::Flag(Flag::DisableCombat),
            "client.disable.mouse" => Field::Flag(Flag::DisableMouse),
            "client.anim" => Field::Anim,
            "client.anim.dict" => Field::AnimDict,
            "client.anim.clip" => Field::AnimClip,
            "client.prop" => Field::Prop,
            "client.prop.model" => Field::PropModel,
            "client.prop.bone" => Field::PropBone,
            "server.export" => Field::ServerExport,
            "server.test" => Field::ServerTest,
            other => {
                let axis = |prefix: &str| other.strip_prefix(prefix).and_then(Axis::parse);
                if let Some(a) = axis("client.prop.pos.") {
                    Field::PropPos(a)
                } else if let Some(a) = axis("client.prop.rot.") {
                    Field::PropRot(a)
                } else {
                    return Err(DomainError::UnknownField(other.to_string()));
                }
            }
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPart {
    Label,
    Action,
    Group,
}

impl ButtonPart {
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "label" => Ok(ButtonPart::Label),
            "action" => Ok(ButtonPart::Action),
            "group" => Ok(ButtonPart::Group),
            _ => Err(DomainError::UnknownField(format!("button.{}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Set { field: Field, value: String },
    Unset(Field),
    AddButton,
    RemoveButton(usize),
    SetButton { index: usize, part: ButtonPart, value: String },
    Preset(Preset),
    Replace(Box<ItemRecord>),
}

impl ItemRecord {
    /// Applies `edit` to a copy of this record.
    pub fn apply(&self, edit: &Edit) -> AppResult<ItemRecord> {
        let mut next = self.clone();

        match edit {
            Edit::Set { field, value } => set_field(&mut next, *field, value)?,
            Edit::Unset(field) => unset_field(&mut next, *field)?,
            Edit::AddButton => next.buttons.push(Button::default()),
            Edit::RemoveButton(index) => {
                check_button(&next, *index)?;
                next.buttons.remove(*index);
            }
            Edit::SetButton { index, part, value } => {
                check_button(&next, *index)?;
                let button = &mut next.buttons[*index];
                match part {
                    ButtonPart::Label => button.label = value.clone(),
                    ButtonPart::Action => button.action = value.clone(),
                    ButtonPart::Group => {
                        button.group = if value.is_empty() { None } else { Some(value.clone()) };
                    }
                }
            }
            Edit::Preset(preset) => next = preset.apply(&next),
            Edit::Replace(record) => next = (**record).clone(),
        }

        Ok(next)
    }
}

fn check_button(item: &ItemRecord, index: usize) -> AppResult<()> {
    if index >= item.buttons.len() {
        return Err(DomainError::NotFound(format!(
            "button {} (item has {})",
            index,
            item.buttons.len()
        )));
    }
    Ok(())
}

fn set_field(item: &mut ItemRecord, field: Field, value: &str) -> AppResult<()> {
    match field {
        Field::Name => item.name = value.trim().to_string(),
        Field::Label => item.label = value.to_string(),
        Field::Weight => item.weight = number_or_zero(value).max(0.0),
        Field::Type => item.item_type = value.parse::<ItemType>()?,
        Field::Image => item.image = value.to_string(),
        Field::Description => item.description = value.to_string(),
        Field::Flag(flag) => *flag_mut(item, flag) = parse_flag(value)?,
        Field::Consume => item.consume = number_or_zero(value),
        Field::Degrade => item.degrade = number_or_zero(value),
        Field::QbDecay => item.qb_decay = number_or_unset(value),
        Field::AmmoName => item.ammoname = value.to_string(),
        Field::DamageReason => item.damagereason = value.to_string(),
        Field::AmmoType => item.ammotype = value.to_string(),
        Field::ClientImage => item.client.image = value.to_string(),
        Field::ClientExport => item.client.export = value.to_string(),
        Field::ClientNotification => item.client.notification = value.to_string(),
        Field::ClientUsetime => {
            item.client.usetime = integer_or_unset(value).and_then(|v| u32::try_from(v).ok());
        }
        Field::Status(key) => {
            let status = &mut item.client.status;
            let slot = match key {
                StatusKey::Hunger => &mut status.hunger,
                StatusKey::Thirst => &mut status.thirst,
                StatusKey::Stress => &mut status.stress,
            };
            *slot = integer_or_unset(value);
        }
        Field::Anim => {
            item.client.anim = if value.is_empty() { None } else { Some(Anim::Simple(value.to_string())) };
        }
        Field::AnimDict => {
            // Clearing the dict drops the whole animation, not just the dict.
            item.client.anim = if value.is_empty() {
                None
            } else {
                let clip = match &item.client.anim {
                    Some(Anim::Detailed { clip, .. }) => clip.clone(),
                    _ => String::new(),
                };
                Some(Anim::Detailed { dict: value.to_string(), clip })
            };
        }
        Field::AnimClip => {
            if let Some(Anim::Detailed { clip, .. }) = &mut item.client.anim {
                *clip = value.to_string();
            } else {
                return Err(detailed_required("client.anim.clip", "client.anim.dict"));
            }
        }
        Field::Prop => {
            item.client.prop = if value.is_empty() { None } else { Some(Prop::Simple(value.to_string())) };
        }
        Field::PropModel => {
            item.client.prop = if value.is_empty() {
                None
            } else {
                match item.client.prop.take() {
                    Some(Prop::Detailed(mut placement)) => {
                        placement.model = value.to_string();
                        Some(Prop::Detailed(placement))
                    }
                    _ => Some(Prop::Detailed(PropPlacement::for_model(value))),
                }
            };
        }
        Field::PropBone => {
            let placement = detailed_prop(item, "client.prop.bone")?;
            placement.bone = integer_or_unset(value).unwrap_or(DEFAULT_PROP_BONE);
        }
        Field::PropPos(axis) => {
            let placement = detailed_prop(item, "client.prop.pos")?;
            *axis.component_mut(&mut placement.pos) = number_or_zero(value);
        }
        Field::PropRot(axis) => {
            let placement = detailed_prop(item, "client.prop.rot")?;
            *axis.component_mut(&mut placement.rot) = number_or_zero(value);
        }
        Field::ServerExport => item.server.export = value.to_string(),
        Field::ServerTest => item.server.test = value.to_string(),
    }
    Ok(())
}

fn unset_field(item: &mut ItemRecord, field: Field) -> AppResult<()> {
    match field {
        Field::Flag(flag) => {
            let default = *flag_mut(&mut ItemRecord::default(), flag);
            *flag_mut(item, flag) = default;
            Ok(())
        }
        Field::Type => {
            item.item_type = ItemType::default();
            Ok(())
        }
        Field::PropBone => {
            detailed_prop(item, "client.prop.bone")?.bone = DEFAULT_PROP_BONE;
            Ok(())
        }
        other => set_field(item, other, ""),
    }
}

fn flag_mut(item: &mut ItemRecord, flag: Flag) -> &mut bool {
    match flag {
        Flag::Unique => &mut item.unique,
        Flag::Useable => &mut item.useable,
        Flag::ShouldClose => &mut item.should_close,
        Flag::Stack => &mut item.stack,
        Flag::Close => &mut item.close,
        Flag::Decay => &mut item.decay,
        Flag::Delete => &mut item.delete,
        Flag::Durability => &mut item.durability,
        Flag::DisableMove => &mut item.client.disable.movement,
        Flag::DisableCar => &mut item.client.disable.car,
        Flag::DisableCombat => &mut item.client.disable.combat,
        Flag::DisableMouse => &mut item.client.disable.mouse,
    }
}

fn detailed_prop<'a>(item: &'a mut ItemRecord, field: &str) -> AppResult<&'a mut PropPlacement> {
    match &mut item.client.prop {
        Some(Prop::Detailed(placement)) => Ok(placement),
        _ => Err(detailed_required(field, "client.prop.model")),
    }
}

fn detailed_required(field: &str, primary: &str) -> DomainError {
    DomainError::InvalidValue {
        field: field.to_string(),
        value: format!("set {} first", primary),
    }
}

/// Checkbox values.
pub fn parse_flag(value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(DomainError::InvalidValue {
            field: "flag".to_string(),
            value: value.to_string(),
        }),
    }
}

/// Unparsable text becomes 0.
pub fn number_or_zero(value: &str) -> f64 {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Unparsable text and 0 both mean "unset".
pub fn number_or_unset(value: &str) -> Option<f64> {
    Some(number_or_zero(value)).filter(|n| *n != 0.0)
}

/// Like [`number_or_unset`], truncating decimals the way an integer input does.
pub fn integer_or_unset(value: &str) -> Option<i64> {
    let value = value.trim();
    let parsed = match value.parse::<i64>() {
        Ok(v) => v,
        Err(_) => number_or_zero(value).trunc() as i64,
    };
    Some(parsed).filter(|v| *v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Vec3;

    fn set(item: &ItemRecord, path: &str, value: &str) -> ItemRecord {
        item.apply(&Edit::Set { field: Field::parse(path).unwrap(), value: value.to_string() })
            .unwrap()
    }

    #[test]
    fn every_listed_path_parses() {
        for path in FIELD_PATHS {
            assert!(Field::parse(path).is_ok(), "{}", path);
        }
        assert!(matches!(Field::parse("client.prop.pos.w"), Err(DomainError::UnknownField(_))));
        assert!(matches!(Field::parse("colour"), Err(DomainError::UnknownField(_))));
    }

    #[test]
    fn edits_leave_the_snapshot_alone() {
        let before = ItemRecord::default();
        let after = set(&before, "label", "Water Bottle");
        assert_eq!(before.label, "");
        assert_eq!(after.label, "Water Bottle");
    }

    #[test]
    fn numeric_coercion() {
        let item = ItemRecord::default();
        assert_eq!(set(&item, "weight", "abc").weight, 0.0);
        assert_eq!(set(&item, "weight", "0.5").weight, 0.5);
        assert_eq!(set(&item, "weight", "-3").weight, 0.0);
        assert_eq!(set(&item, "consume", "").consume, 0.0);
        assert_eq!(set(&item, "qbDecay", "0").qb_decay, None);
        assert_eq!(set(&item, "qbDecay", "3.0").qb_decay, Some(3.0));
        assert_eq!(set(&item, "client.usetime", "2500").client.usetime, Some(2500));
        assert_eq!(set(&item, "client.usetime", "nope").client.usetime, None);
        assert_eq!(set(&item, "client.usetime", "-1").client.usetime, None);
        assert_eq!(set(&item, "client.status.stress", "-50000").client.status.stress, Some(-50000));
        assert_eq!(set(&item, "client.status.hunger", "12.7").client.status.hunger, Some(12));
        assert_eq!(set(&item, "client.status.hunger", "0").client.status.hunger, None);
    }

    #[test]
    fn flags() {
        let item = set(&ItemRecord::default(), "client.disable.move", "yes");
        assert!(item.client.disable.movement);
        let item = set(&item, "stack", "off");
        assert!(!item.stack);
        let item = item.apply(&Edit::Unset(Field::parse("stack").unwrap())).unwrap();
        assert!(item.stack);
        assert!(ItemRecord::default()
            .apply(&Edit::Set { field: Field::Flag(Flag::Unique), value: "maybe".into() })
            .is_err());
    }

    #[test]
    fn type_values() {
        assert_eq!(set(&ItemRecord::default(), "type", "weapon").item_type, ItemType::Weapon);
        assert_eq!(set(&ItemRecord::default(), "type", "generic").item_type, ItemType::Generic);
        assert!(ItemRecord::default()
            .apply(&Edit::Set { field: Field::Type, value: "vehicle".into() })
            .is_err());
    }

    #[test]
    fn anim_switches_between_forms() {
        let item = set(&ItemRecord::default(), "client.anim", "eating");
        assert_eq!(item.client.anim, Some(Anim::Simple("eating".into())));

        // a clip needs the detailed form
        assert!(item
            .apply(&Edit::Set { field: Field::AnimClip, value: "loop".into() })
            .is_err());

        let item = set(&item, "client.anim.dict", "mp_player_inteat");
        assert_eq!(
            item.client.anim,
            Some(Anim::Detailed { dict: "mp_player_inteat".into(), clip: String::new() })
        );
        let item = set(&item, "client.anim.clip", "loop_eat");
        let item = set(&item, "client.anim.dict", "mp_player_intdrink");
        assert_eq!(
            item.client.anim,
            Some(Anim::Detailed { dict: "mp_player_intdrink".into(), clip: "loop_eat".into() })
        );

        let item = set(&item, "client.anim.dict", "");
        assert_eq!(item.client.anim, None);
    }

    #[test]
    fn prop_detailed_lifecycle() {
        let item = set(&ItemRecord::default(), "client.prop.model", "prop_cs_burger_01");
        let Some(Prop::Detailed(p)) = &item.client.prop else { panic!("expected detailed prop") };
        assert_eq!(p.bone, DEFAULT_PROP_BONE);
        assert_eq!(p.pos, Vec3::ZERO);

        let item = set(&item, "client.prop.pos.z", "0.06");
        let item = set(&item, "client.prop.rot.x", "bad");
        let item = set(&item, "client.prop.bone", "0");
        let item = set(&item, "client.prop.model", "prop_ld_can_01");
        let Some(Prop::Detailed(p)) = &item.client.prop else { panic!("expected detailed prop") };
        assert_eq!(p.model, "prop_ld_can_01");
        assert_eq!(p.pos.z, 0.06);
        assert_eq!(p.rot.x, 0.0);
        assert_eq!(p.bone, DEFAULT_PROP_BONE);

        let item = set(&item, "client.prop.model", "");
        assert_eq!(item.client.prop, None);
        assert!(item
            .apply(&Edit::Set { field: Field::PropBone, value: "1".into() })
            .is_err());

        let item = set(&item, "client.prop", "prop_cs_ciggy_01");
        assert_eq!(item.client.prop, Some(Prop::Simple("prop_cs_ciggy_01".into())));
        let item = item.apply(&Edit::Unset(Field::Prop)).unwrap();
        assert_eq!(item.client.prop, None);
    }

    #[test]
    fn buttons() {
        let item = ItemRecord::default()
            .apply(&Edit::AddButton)
            .and_then(|i| i.apply(&Edit::AddButton))
            .unwrap();
        assert_eq!(item.buttons.len(), 2);

        let item = item
            .apply(&Edit::SetButton { index: 1, part: ButtonPart::Label, value: "Tune".into() })
            .and_then(|i| i.apply(&Edit::SetButton { index: 1, part: ButtonPart::Group, value: "".into() }))
            .unwrap();
        assert_eq!(item.buttons[1].label, "Tune");
        assert_eq!(item.buttons[1].group, None);

        let item = item.apply(&Edit::RemoveButton(0)).unwrap();
        assert_eq!(item.buttons.len(), 1);
        assert_eq!(item.buttons[0].label, "Tune");
        assert!(matches!(item.apply(&Edit::RemoveButton(4)), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn preset_edit() {
        let item = ItemRecord::default().apply(&Edit::Preset(Preset::Drink)).unwrap();
        assert_eq!(item.client.status.thirst, Some(200000));
    }
}
