//! qb-core shared item entries (`qb-core/shared/items.lua`).

use crate::generator::lua::{is_identifier, number, quote};
use crate::models::item::ItemRecord;

pub const DESTINATION: &str = "qb-core/shared/items.lua";

/// Column the entry key is padded to, for alignment with neighbouring items.
pub const KEY_WIDTH: usize = 30;

/// Renders `item` as a single `QBShared.Items` entry, wrapped in the table it belongs to.
pub fn generate(item: &ItemRecord) -> String {
    let mut entry = format!(
        "{:<width$} = {{ name = {}, label = {}, weight = {}, type = {}, image = {}, unique = {}, useable = {}, shouldClose = {}",
        entry_key(&item.name),
        quote(&item.name),
        quote(&item.label),
        number(item.weight),
        quote(item.item_type.as_str()),
        quote(&item.image),
        item.unique,
        item.useable,
        item.should_close,
        width = KEY_WIDTH,
    );

    if !item.description.is_empty() {
        entry.push_str(&format!(", description = {}", quote(&item.description)));
    }
    if let Some(decay) = item.qb_decay.filter(|d| *d > 0.0) {
        entry.push_str(&format!(", decay = {}", number(decay)));
    }
    if item.delete {
        entry.push_str(", delete = true");
    }

    entry.push_str(" },");

    format!(
        "-- Add this to {}\n\nQBShared.Items = {{\n    -- ... your existing items ...\n    \n    {}\n    \n    -- ... rest of your items ...\n}}",
        DESTINATION, entry
    )
}

fn entry_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("[{}]", quote(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::ItemType;
    use pretty_assertions::assert_eq;

    fn water() -> ItemRecord {
        ItemRecord {
            name: "water_bottle".into(),
            label: "Water Bottle".into(),
            weight: 2.0,
            image: "water_bottle.png".into(),
            useable: true,
            ..Default::default()
        }
    }

    fn entry_line(code: &str) -> &str {
        code.lines().find(|l| l.contains("name = ")).unwrap()
    }

    #[test]
    fn full_output() {
        let expected = "-- Add this to qb-core/shared/items.lua\n\n\
QBShared.Items = {\n    -- ... your existing items ...\n    \n    \
water_bottle                   = { name = 'water_bottle', label = 'Water Bottle', weight = 2, type = 'item', image = 'water_bottle.png', unique = false, useable = true, shouldClose = true },\n    \n    -- ... rest of your items ...\n}";
        assert_eq!(generate(&water()), expected);
    }

    #[test]
    fn whole_weights_render_as_integers() {
        let mut item = water();
        assert!(entry_line(&generate(&item)).contains("weight = 2,"));
        item.weight = 2.5;
        assert!(entry_line(&generate(&item)).contains("weight = 2.5,"));
    }

    #[test]
    fn key_is_padded_to_thirty_columns() {
        let code = generate(&water());
        let line = entry_line(&code).trim_start();
        assert_eq!(line.find(" = {"), Some(KEY_WIDTH));

        let mut item = water();
        item.name = "a_really_long_item_name_that_overflows".into();
        let code = generate(&item);
        assert!(entry_line(&code).trim_start().starts_with("a_really_long_item_name_that_overflows = {"));
    }

    #[test]
    fn optional_tail_fields_in_order() {
        let mut item = water();
        item.item_type = ItemType::Weapon;
        item.description = "Fresh and cold".into();
        item.qb_decay = Some(3.5);
        item.delete = true;
        assert!(entry_line(&generate(&item)).ends_with(
            "type = 'weapon', image = 'water_bottle.png', unique = false, useable = true, shouldClose = true, description = 'Fresh and cold', decay = 3.5, delete = true },"
        ));
    }

    #[test]
    fn zero_decay_is_omitted() {
        let mut item = water();
        item.qb_decay = Some(0.0);
        assert!(!generate(&item).contains("decay"));
    }

    #[test]
    fn non_identifier_names_use_bracket_keys() {
        let mut item = water();
        item.name = "water-bottle".into();
        assert!(entry_line(&generate(&item)).trim_start().starts_with("['water-bottle']"));
    }
}
