//! Command parser for the editing shell.
//!
//! Examples:
//!   "set label \"Water Bottle\""     -> Command::Set { field: Label, value: "Water Bottle" }
//!   "unset client.anim"              -> Command::Unset(Anim)
//!   "button 0 action eat_burger"     -> Command::ButtonSet { index: 0, part: Action, .. }
//!   "preset drink"                   -> Command::Preset(Drink)
//!   "target qb"                      -> Command::Target(Qb)
//!
//! Tokens are split shell-style, so values with spaces need quotes.

use crate::edit::{ButtonPart, Field};
use crate::error::DomainError;
use crate::models::types::Target;
use crate::presets::Preset;
use crate::shell::{CommandError, CommandResult};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Show,
    Preview,
    Instructions,
    Target,
    Set,
    Unset,
    Button,
    Preset,
    Copy,
    Download,
    Check,
    Load,
    Save,
    Undo,
    Reset,
    Fields,
    Help,
    Quit,
}

impl Verb {
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Show => "show",
            Verb::Preview => "preview",
            Verb::Instructions => "instructions",
            Verb::Target => "target",
            Verb::Set => "set",
            Verb::Unset => "unset",
            Verb::Button => "button",
            Verb::Preset => "preset",
            Verb::Copy => "copy",
            Verb::Download => "download",
            Verb::Check => "check",
            Verb::Load => "load",
            Verb::Save => "save",
            Verb::Undo => "undo",
            Verb::Reset => "reset",
            Verb::Fields => "fields",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let verb = match s.to_ascii_lowercase().as_str() {
            "show" | "record" => Verb::Show,
            "preview" | "p" | "code" => Verb::Preview,
            "instructions" | "howto" => Verb::Instructions,
            "target" | "tab" => Verb::Target,
            "set" => Verb::Set,
            "unset" | "clear" => Verb::Unset,
            "button" | "btn" => Verb::Button,
            "preset" => Verb::Preset,
            "copy" => Verb::Copy,
            "download" | "export" => Verb::Download,
            "check" => Verb::Check,
            "load" | "open" => Verb::Load,
            "save" => Verb::Save,
            "undo" => Verb::Undo,
            "reset" | "new" => Verb::Reset,
            "fields" => Verb::Fields,
            "help" | "?" => Verb::Help,
            "quit" | "exit" | "q" => Verb::Quit,
            _ => return None,
        };
        Some(verb)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank line
    Empty,
    Show,
    Preview,
    Instructions,
    Target(Target),
    Set { field: Field, value: String },
    Unset(Field),
    ButtonAdd,
    ButtonRemove(usize),
    ButtonSet { index: usize, part: ButtonPart, value: String },
    Preset(Preset),
    Copy,
    Download,
    Check,
    Load(PathBuf),
    Save(PathBuf),
    Undo,
    Reset,
    Fields,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> CommandResult<Command> {
    let tokens = shlex::split(input.trim())
        .ok_or_else(|| CommandError::Usage("unbalanced quotes".to_string()))?;

    let Some((head, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };
    if head.starts_with('#') {
        return Ok(Command::Empty);
    }

    let verb = Verb::parse(head).ok_or_else(|| CommandError::UnknownCommand(head.clone()))?;

    let cmd = match verb {
        Verb::Show => no_args(verb, args, Command::Show)?,
        Verb::Preview => no_args(verb, args, Command::Preview)?,
        Verb::Instructions => no_args(verb, args, Command::Instructions)?,
        Verb::Copy => no_args(verb, args, Command::Copy)?,
        Verb::Download => no_args(verb, args, Command::Download)?,
        Verb::Check => no_args(verb, args, Command::Check)?,
        Verb::Undo => no_args(verb, args, Command::Undo)?,
        Verb::Reset => no_args(verb, args, Command::Reset)?,
        Verb::Fields => no_args(verb, args, Command::Fields)?,
        Verb::Help => Command::Help,
        Verb::Quit => Command::Quit,
        Verb::Target => match args {
            [t] => Command::Target(t.parse::<Target>()?),
            _ => return Err(usage("target ox|qb")),
        },
        Verb::Set => match args {
            [path] => Command::Set { field: Field::parse(path)?, value: String::new() },
            [path, rest @ ..] => Command::Set { field: Field::parse(path)?, value: rest.join(" ") },
            [] => return Err(usage("set <field> <value>")),
        },
        Verb::Unset => match args {
            [path] => Command::Unset(Field::parse(path)?),
            _ => return Err(usage("unset <field>")),
        },
        Verb::Preset => match args {
            [name] => Command::Preset(name.parse::<Preset>()?),
            _ => return Err(usage("preset drink|food")),
        },
        Verb::Load => match args {
            [path] => Command::Load(PathBuf::from(path)),
            _ => return Err(usage("load <file>")),
        },
        Verb::Save => match args {
            [path] => Command::Save(PathBuf::from(path)),
            _ => return Err(usage("save <file>")),
        },
        Verb::Button => parse_button(args)?,
    };

    Ok(cmd)
}

fn parse_button(args: &[String]) -> CommandResult<Command> {
    const USAGE: &str = "button add | button rm <index> | button <index> label|action|group <value>";

    match args {
        [add] if add == "add" => Ok(Command::ButtonAdd),
        [rm, index] if rm == "rm" || rm == "remove" => Ok(Command::ButtonRemove(parse_index(index)?)),
        [index, part, rest @ ..] => {
            let index = parse_index(index).map_err(|_| usage(USAGE))?;
            Ok(Command::ButtonSet {
                index,
                part: ButtonPart::parse(part)?,
                value: rest.join(" "),
            })
        }
        _ => Err(usage(USAGE)),
    }
}

fn parse_index(s: &str) -> CommandResult<usize> {
    s.parse::<usize>().map_err(|_| {
        CommandError::Domain(DomainError::InvalidValue {
            field: "button index".to_string(),
            value: s.to_string(),
        })
    })
}

fn no_args(verb: Verb, args: &[String], cmd: Command) -> CommandResult<Command> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(usage(verb.as_str()))
    }
}

fn usage(text: &str) -> CommandError {
    CommandError::Usage(text.to_string())
}
