//! Compiles generated snippets with an embedded Luau VM.
//!
//! A snippet is a fragment (an ox entry is a table field, the qb output an
//! assignment), so it is wrapped into a loadable chunk first.

use crate::error::{AppResult, DomainError};
use crate::hardening::MAX_LUA_BYTES;
use crate::models::types::Target;
use mlua::{DeserializeOptions, Lua, LuaSerdeExt, Table};

/// Wraps a snippet into a chunk that evaluates to the items table it defines.
pub fn wrap_snippet(target: Target, code: &str) -> String {
    match target {
        Target::Ox => format!("return {{\n{}\n}}", code),
        Target::Qb => format!("{}\nreturn QBShared.Items", code),
    }
}

/// Compiles a generated snippet without running it.
pub fn check_snippet(target: Target, code: &str) -> AppResult<()> {
    let name = format!("{}_snippet", target.as_str());
    check_size(&name, code)?;

    let lua = Lua::new();
    lua.load(wrap_snippet(target, code)).set_name(name).into_function()?;
    Ok(())
}

/// Runs a snippet and returns the items table as JSON. Button callbacks are
/// dropped, `vec3(x, y, z)` becomes `{x, y, z}`.
pub fn evaluate_snippet(target: Target, code: &str) -> AppResult<serde_json::Value> {
    let name = format!("{}_snippet", target.as_str());
    check_size(&name, code)?;

    let lua = Lua::new();
    install_stubs(&lua)?;

    let items: Table = lua.load(wrap_snippet(target, code)).set_name(name).eval()?;
    let options = DeserializeOptions::new().deny_unsupported_types(false);
    let value = lua.from_value_with(mlua::Value::Table(items), options)?;
    Ok(value)
}

// Globals the snippets expect to exist at load time.
fn install_stubs(lua: &Lua) -> mlua::Result<()> {
    let globals = lua.globals();

    let vec3 = lua.create_function(|lua, (x, y, z): (f64, f64, f64)| {
        let t = lua.create_table()?;
        t.set("x", x)?;
        t.set("y", y)?;
        t.set("z", z)?;
        Ok(t)
    })?;
    globals.set("vec3", vec3)?;

    let shared = lua.create_table()?;
    shared.set("Items", lua.create_table()?)?;
    globals.set("QBShared", shared)?;

    Ok(())
}

fn check_size(name: &str, code: &str) -> AppResult<()> {
    if code.len() > MAX_LUA_BYTES {
        return Err(DomainError::Validation {
            field: "lua",
            message: format!("Lua chunk '{}' too large ({} bytes)", name, code.len()),
        });
    }
    Ok(())
}
