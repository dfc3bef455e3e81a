pub mod lua;
pub mod ox;
pub mod qb;

use crate::models::item::ItemRecord;
use crate::models::types::Target;

/// Renders the snippet for `target`. Never fails; absent fields produce no output.
pub fn generate(item: &ItemRecord, target: Target) -> String {
    match target {
        Target::Ox => ox::generate(item),
        Target::Qb => qb::generate(item),
    }
}

/// File the snippet is meant to be pasted into.
pub fn destination(target: Target) -> &'static str {
    match target {
        Target::Ox => ox::DESTINATION,
        Target::Qb => qb::DESTINATION,
    }
}

/// Steps for installing a snippet, in order.
pub fn instructions(target: Target) -> &'static [&'static str] {
    match target {
        Target::Ox => &[
            "Copy the generated code",
            "Open ox_inventory/data/items.lua",
            "Add the item configuration to the items table",
            "Restart ox_inventory or refresh the resource",
            "If using custom exports, make sure your resource handles the functions",
        ],
        Target::Qb => &[
            "Copy the generated code",
            "Open qb-core/shared/items.lua",
            "Add the item to the QBShared.Items table",
            "Place the item image in qb-inventory/html/images/",
            "Restart qb-core and qb-inventory",
        ],
    }
}

/// Numbered instructions under a `<addon> Instructions:` heading.
pub fn render_instructions(target: Target) -> String {
    let mut out = format!("{} Instructions:", target.label());
    for (idx, step) in instructions(target).iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", idx + 1, step));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_name_the_destination() {
        for target in Target::ALL {
            assert!(instructions(target).iter().any(|s| s.contains(destination(target))));
        }
        assert!(instructions(Target::Qb).iter().any(|s| s.contains("qb-inventory/html/images/")));
    }

    #[test]
    fn rendered_instructions_are_numbered() {
        let text = render_instructions(Target::Ox);
        assert!(text.starts_with("ox_inventory Instructions:\n  1. Copy the generated code"));
        assert!(text.ends_with("  5. If using custom exports, make sure your resource handles the functions"));
    }
}
