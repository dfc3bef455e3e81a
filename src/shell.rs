//! Line-oriented editing shell around a [`Session`].

pub mod parser;

use crate::edit::{Edit, FIELD_PATHS};
use crate::error::DomainError;
use crate::export::{self, Clipboard, DISABLED_HINT, ExportOutcome};
use crate::generator;
use crate::import::{self, FileFormat};
use crate::lua::check_snippet;
use crate::models::item::ItemRecord;
use crate::state::Session;
use parser::{Command, parse_command};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub const PROMPT: &str = "itemforge> ";

const HELP: &str = "\
commands:
  show                              print the current record
  preview                           print the snippet for the active target
  instructions                      how to install the snippet for the active target
  target ox|qb                      switch the active target
  set <field> <value>               change a field (see `fields`)
  unset <field>                     reset a field to its default
  button add                        append an empty button
  button rm <index>                 remove a button
  button <index> label|action|group <value>
  preset drink|food                 fill consumable fields
  copy                              copy the snippet to the clipboard
  download                          write the snippet to the output directory
  check                             compile the snippet
  load <file> | save <file>         read or write the record (.yaml, .json, .toml)
  undo                              revert the last change
  reset                             start over with a blank record
  fields | help | quit";

/// What the shell prints after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Silent,
    Quit,
}

impl Reply {
    fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }
}

pub struct Shell {
    session: Session,
    out_dir: PathBuf,
    clipboard: Box<dyn Clipboard>,
    check_lua: bool,
}

impl Shell {
    pub fn new(session: Session, out_dir: PathBuf, clipboard: Box<dyn Clipboard>, check_lua: bool) -> Self {
        Self { session, out_dir, clipboard, check_lua }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn execute(&mut self, line: &str) -> CommandResult<Reply> {
        let cmd = parse_command(line)?;
        tracing::debug!(?cmd, "shell command");

        let reply = match cmd {
            Command::Empty => Reply::Silent,
            Command::Quit => Reply::Quit,
            Command::Help => Reply::text(HELP),
            Command::Fields => Reply::text(FIELD_PATHS.join("\n")),
            Command::Show => Reply::Text(import::render_item(self.session.record(), FileFormat::Yaml)?),
            Command::Preview => {
                let mut out = self.session.snippet();
                if !self.session.can_export() {
                    out.push_str("\n\n");
                    out.push_str(DISABLED_HINT);
                }
                Reply::Text(out)
            }
            Command::Instructions => Reply::Text(generator::render_instructions(self.session.target())),
            Command::Target(target) => {
                self.session.set_target(target);
                Reply::Text(format!("target: {}", target.label()))
            }
            Command::Set { field, value } => self.edit(Edit::Set { field, value })?,
            Command::Unset(field) => self.edit(Edit::Unset(field))?,
            Command::ButtonAdd => {
                self.edit(Edit::AddButton)?;
                Reply::Text(format!("button {} added", self.session.record().buttons.len() - 1))
            }
            Command::ButtonRemove(index) => self.edit(Edit::RemoveButton(index))?,
            Command::ButtonSet { index, part, value } => self.edit(Edit::SetButton { index, part, value })?,
            Command::Preset(preset) => {
                self.edit(Edit::Preset(preset))?;
                Reply::Text(format!("applied {} preset", preset))
            }
            Command::Copy => {
                let target = self.session.target();
                match export::copy_to_clipboard(self.session.record(), target, self.clipboard.as_mut())? {
                    ExportOutcome::Copied { bytes } => {
                        Reply::Text(format!("copied {} bytes of {} code", bytes, target.label()))
                    }
                    other => disabled_or(other),
                }
            }
            Command::Download => {
                let target = self.session.target();
                match export::download(self.session.record(), target, &self.out_dir, self.check_lua)? {
                    ExportOutcome::Written(path) => Reply::Text(format!("wrote {}", path.display())),
                    other => disabled_or(other),
                }
            }
            Command::Check => {
                check_snippet(self.session.target(), &self.session.snippet())?;
                Reply::text("lua ok")
            }
            Command::Load(path) => {
                let item = import::load_item(&path)?;
                self.edit(Edit::Replace(Box::new(item)))?;
                Reply::Text(format!("loaded {}", path.display()))
            }
            Command::Save(path) => {
                import::save_item(&path, self.session.record())?;
                Reply::Text(format!("saved {}", path.display()))
            }
            Command::Undo => {
                if self.session.undo() {
                    Reply::text("undone")
                } else {
                    Reply::text("nothing to undo")
                }
            }
            Command::Reset => self.edit(Edit::Replace(Box::new(ItemRecord::default())))?,
        };

        Ok(reply)
    }

    fn edit(&mut self, edit: Edit) -> CommandResult<Reply> {
        self.session.apply(&edit)?;
        Ok(Reply::text("ok"))
    }

    /// Reads commands until `quit` or end of input. Command errors are
    /// printed and the loop goes on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(Reply::Quit) => return Ok(()),
                Ok(Reply::Silent) => {}
                Ok(Reply::Text(text)) => writeln!(output, "{}", text.trim_end())?,
                Err(e) => {
                    tracing::debug!(error = %e, line = %line, "command failed");
                    writeln!(output, "error: {}", e)?;
                }
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }
}

fn disabled_or(outcome: ExportOutcome) -> Reply {
    match outcome {
        ExportOutcome::Disabled => Reply::text(DISABLED_HINT),
        other => Reply::Text(format!("{:?}", other)),
    }
}
