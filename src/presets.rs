use crate::error::DomainError;
use crate::models::item::{Anim, ItemRecord, Prop, PropPlacement, Status, DEFAULT_PROP_BONE};
use crate::models::types::Vec3;
use std::fmt;
use std::str::FromStr;

const HAND_OFFSET: Vec3 = Vec3::new(0.01, 0.01, 0.06);
const HAND_ROTATION: Vec3 = Vec3::new(5.0, 5.0, -180.5);

/// Canned client setups for common consumables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    Drink,
    Food,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Drink => "drink",
            Preset::Food => "food",
        }
    }

    /// Returns a copy of `item` with status, anim, prop, usetime and
    /// notification replaced. Other client fields are kept.
    pub fn apply(&self, item: &ItemRecord) -> ItemRecord {
        let mut next = item.clone();
        let client = &mut next.client;

        match self {
            Preset::Drink => {
                client.status = Status { thirst: Some(200000), ..Default::default() };
                client.anim = Some(Anim::Detailed {
                    dict: "mp_player_intdrink".to_string(),
                    clip: "loop_bottle".to_string(),
                });
                client.prop = Some(held_prop("prop_ld_can_01"));
                client.usetime = Some(2500);
                client.notification = "You quenched your thirst with a sprunk".to_string();
            }
            Preset::Food => {
                client.status = Status { hunger: Some(200000), ..Default::default() };
                client.anim = Some(Anim::Detailed {
                    dict: "mp_player_inteat".to_string(),
                    clip: "loop_eat".to_string(),
                });
                client.prop = Some(held_prop("prop_cs_burger_01"));
                client.usetime = Some(3000);
                client.notification = "You enjoyed a delicious burger".to_string();
            }
        }

        next
    }
}

fn held_prop(model: &str) -> Prop {
    Prop::Detailed(PropPlacement {
        model: model.to_string(),
        bone: DEFAULT_PROP_BONE,
        pos: HAND_OFFSET,
        rot: HAND_ROTATION,
    })
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drink" => Ok(Preset::Drink),
            "food" => Ok(Preset::Food),
            _ => Err(DomainError::NotFound(format!("preset '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::Disable;

    #[test]
    fn drink_sets_thirst() {
        let item = Preset::Drink.apply(&ItemRecord::default());
        assert_eq!(item.client.status.thirst, Some(200000));
        assert_eq!(item.client.status.hunger, None);
        assert_eq!(item.client.usetime, Some(2500));
        match item.client.prop {
            Some(Prop::Detailed(p)) => {
                assert_eq!(p.model, "prop_ld_can_01");
                assert_eq!(p.bone, 18905);
                assert_eq!(p.rot.z, -180.5);
            }
            other => panic!("unexpected prop: {:?}", other),
        }
    }

    #[test]
    fn food_replaces_drink() {
        let drink = Preset::Drink.apply(&ItemRecord::default());
        let food = Preset::Food.apply(&drink);
        assert_eq!(food.client.status.hunger, Some(200000));
        assert_eq!(food.client.status.thirst, None);
        assert_eq!(food.client.notification, "You enjoyed a delicious burger");
        assert_eq!(
            food.client.anim,
            Some(Anim::Detailed { dict: "mp_player_inteat".into(), clip: "loop_eat".into() })
        );
        // the source record is untouched
        assert_eq!(drink.client.status.thirst, Some(200000));
    }

    #[test]
    fn unrelated_client_fields_survive() {
        let mut item = ItemRecord::default();
        item.client.export = "my_res.use".into();
        item.client.disable = Disable { car: true, ..Default::default() };
        let item = Preset::Food.apply(&item);
        assert_eq!(item.client.export, "my_res.use");
        assert!(item.client.disable.car);
    }
}
