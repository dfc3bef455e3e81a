//! ox_inventory item definitions (`ox_inventory/data/items.lua`).

use crate::generator::lua::{number, quote, quote_double};
use crate::models::item::{Anim, Button, ItemRecord, ItemType, Prop, ServerData};

pub const DESTINATION: &str = "ox_inventory/data/items.lua";

/// Renders `item` as an entry of the ox_inventory items table.
pub fn generate(item: &ItemRecord) -> String {
    let mut code = format!("\t[{}] = {{\n", quote(&item.name));
    code.push_str(&format!("\t\tlabel = {},\n", quote(&item.label)));
    code.push_str(&format!("\t\tweight = {},\n", number(item.weight)));

    if !item.stack {
        code.push_str("\t\tstack = false,\n");
    }
    if !item.close {
        code.push_str("\t\tclose = false,\n");
    }
    if item.durability {
        code.push_str("\t\tdurability = true,\n");
    }

    match item.item_type {
        ItemType::Weapon => {
            if !item.ammoname.is_empty() {
                code.push_str(&format!("\t\tammoname = {},\n", quote(&item.ammoname)));
            }
            if !item.damagereason.is_empty() {
                code.push_str(&format!("\t\tdamagereason = {},\n", quote(&item.damagereason)));
            }
        }
        ItemType::Ammo => {
            if !item.ammotype.is_empty() {
                code.push_str(&format!("\t\tammotype = {},\n", quote(&item.ammotype)));
            }
        }
        ItemType::Generic => {}
    }

    if item.decay && item.degrade > 0.0 {
        code.push_str(&format!("\t\tdegrade = {},\n", number(item.degrade)));
    }
    if item.decay && item.consume > 0.0 {
        code.push_str(&format!(
            "\t\tconsume = {}, -- amount to consume per use\n",
            number(item.consume)
        ));
    }
    if item.decay {
        code.push_str("\t\tdecay = true,\n");
    }

    if item.has_client_data() {
        push_client(&mut code, item);
    }
    if !item.server.is_empty() {
        push_server(&mut code, &item.server);
    }

    let buttons: Vec<&Button> = item.valid_buttons().collect();
    if !buttons.is_empty() {
        push_buttons(&mut code, &buttons);
    }

    // Emitted regardless of the decay-gated consume above.
    if item.consume > 0.0 {
        code.push_str(&format!("\t\tconsume = {}\n", number(item.consume)));
    }

    code.push_str("\t},");

    format!("-- Add this to {}\n\n{}", DESTINATION, code)
}

fn push_client(code: &mut String, item: &ItemRecord) {
    let client = &item.client;
    code.push_str("\t\tclient = {\n");

    let image = item.client_image();
    if !image.is_empty() {
        code.push_str(&format!("\t\t\timage = {},\n", quote(image)));
    }

    let status = client.status.entries();
    if !status.is_empty() {
        let parts: Vec<String> = status.iter().map(|(k, v)| format!(" {} = {}", k, v)).collect();
        code.push_str(&format!("\t\t\tstatus = {{{} }},\n", parts.join(",")));
    }

    match &client.anim {
        Some(Anim::Simple(name)) if !name.is_empty() => {
            code.push_str(&format!("\t\t\tanim = {},\n", quote(name)));
        }
        Some(Anim::Detailed { dict, clip }) if !dict.is_empty() => {
            code.push_str(&format!(
                "\t\t\tanim = {{ dict = {}, clip = {} }},\n",
                quote_double(dict),
                quote_double(clip)
            ));
        }
        _ => {}
    }

    match &client.prop {
        Some(Prop::Simple(name)) if !name.is_empty() => {
            code.push_str(&format!("\t\t\tprop = {},\n", quote(name)));
        }
        Some(Prop::Detailed(p)) if !p.model.is_empty() => {
            code.push_str("\t\t\tprop = {\n");
            code.push_str(&format!("\t\t\t\tmodel = {},\n", quote(&p.model)));
            code.push_str(&format!("\t\t\t\tbone = {},\n", p.bone));
            code.push_str(&format!(
                "\t\t\t\tpos = vec3({}, {}, {}),\n",
                number(p.pos.x),
                number(p.pos.y),
                number(p.pos.z)
            ));
            code.push_str(&format!(
                "\t\t\t\trot = vec3({}, {}, {})\n",
                number(p.rot.x),
                number(p.rot.y),
                number(p.rot.z)
            ));
            code.push_str("\t\t\t},\n");
        }
        _ => {}
    }

    if let Some(usetime) = client.usetime.filter(|t| *t > 0) {
        code.push_str(&format!("\t\t\tusetime = {},\n", usetime));
    }

    let disabled = client.disable.enabled_names();
    if !disabled.is_empty() {
        let parts: Vec<String> = disabled.iter().map(|k| format!(" {} = true", k)).collect();
        code.push_str(&format!("\t\t\tdisable = {{{} }},\n", parts.join(",")));
    }

    if !client.export.is_empty() {
        code.push_str(&format!("\t\t\texport = {}\n", quote(&client.export)));
    }

    code.push_str("\t\t},\n");
}

fn push_server(code: &mut String, server: &ServerData) {
    code.push_str("\t\tserver = {\n");

    if !server.export.is_empty() {
        code.push_str(&format!("\t\t\texport = {}", quote(&server.export)));
        if !server.test.is_empty() {
            code.push(',');
        }
        code.push('\n');
    }
    if !server.test.is_empty() {
        code.push_str(&format!("\t\t\ttest = {}\n", quote(&server.test)));
    }

    code.push_str("\t\t},\n");
}

// The action is only echoed, never called.
fn push_buttons(code: &mut String, buttons: &[&Button]) {
    code.push_str("\t\tbuttons = {\n");

    for (idx, button) in buttons.iter().enumerate() {
        code.push_str("\t\t\t{\n");
        code.push_str(&format!("\t\t\t\tlabel = {},\n", quote(&button.label)));
        if let Some(group) = button.group.as_deref().filter(|g| !g.is_empty()) {
            code.push_str(&format!("\t\t\t\tgroup = {},\n", quote(group)));
        }
        code.push_str("\t\t\t\taction = function(slot)\n");
        code.push_str(&format!("\t\t\t\t\tprint({})\n", quote(&button.action)));
        code.push_str("\t\t\t\tend\n");
        code.push_str("\t\t\t}");
        if idx + 1 < buttons.len() {
            code.push(',');
        }
        code.push('\n');
    }

    code.push_str("\t\t},\n");
}
