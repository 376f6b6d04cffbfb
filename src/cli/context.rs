//! Shell state and command dispatch.

use std::fmt;

use strsim::levenshtein;

use crate::{
    core::{errors::LedgerError, LedgerEngine},
    ledger::Owner,
};

use super::{commands, output};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failure of a single shell command. The shell reports it and keeps running.
#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    UnknownCommand(String),
    Ledger(LedgerError),
}

impl From<LedgerError> for CommandError {
    fn from(err: LedgerError) -> Self {
        CommandError::Ledger(err)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidArguments(message) => f.write_str(message),
            CommandError::UnknownCommand(name) => write!(f, "Unknown command `{}`", name),
            CommandError::Ledger(err) => write!(f, "[{}] {}", err.code().as_u32(), err),
        }
    }
}

pub type CommandResult = Result<(), CommandError>;

/// Single engine instance plus the caller identity applied to each command.
pub struct ShellContext {
    pub(crate) engine: LedgerEngine,
    pub(crate) caller: Owner,
    pub running: bool,
}

impl ShellContext {
    pub fn new(engine: LedgerEngine, caller: Owner) -> Self {
        Self {
            engine,
            caller,
            running: true,
        }
    }

    pub fn caller(&self) -> &Owner {
        &self.caller
    }

    pub fn engine(&self) -> &LedgerEngine {
        &self.engine
    }

    pub fn prompt(&self) -> String {
        format!("ledger({})> ", self.caller)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        commands::COMMANDS.iter().map(|spec| spec.name).collect()
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let spec = commands::find(command)
            .ok_or_else(|| CommandError::UnknownCommand(command.to_string()))?;
        (spec.handler)(self, args)?;
        if self.running {
            Ok(LoopControl::Continue)
        } else {
            Ok(LoopControl::Exit)
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match &err {
            CommandError::UnknownCommand(name) => {
                output::error(&err);
                if let Some(best) = self.suggest_command(name) {
                    output::info(format!("Did you mean `{}`?", best));
                }
            }
            CommandError::InvalidArguments(_) => {
                output::error(&err);
                output::info("Use `help` for usage details.");
            }
            CommandError::Ledger(_) => output::error(&err),
        }
    }

    fn suggest_command(&self, input: &str) -> Option<&'static str> {
        self.command_names()
            .into_iter()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= 3)
            .map(|(_, name)| name)
    }
}
