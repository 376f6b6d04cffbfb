use colored::Colorize;
use std::fmt;

/// Message categories used by the shell output helpers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "INFO",
        MessageKind::Success => "OK",
        MessageKind::Warning => "WARNING",
        MessageKind::Error => "ERROR",
    }
}

/// Formats `message` with a level prefix; colour is applied unless disabled
/// through [`set_plain`].
pub fn render(kind: MessageKind, message: impl fmt::Display) -> String {
    let prefix = format!("{}:", label(kind));
    let prefix = match kind {
        MessageKind::Info => prefix.cyan(),
        MessageKind::Success => prefix.green().bold(),
        MessageKind::Warning => prefix.yellow().bold(),
        MessageKind::Error => prefix.red().bold(),
    };
    format!("{} {}", prefix, message)
}

/// Turns colour output off for scripted runs.
pub fn set_plain(plain: bool) {
    if plain {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}

pub fn info(message: impl fmt::Display) {
    println!("{}", render(MessageKind::Info, message));
}

pub fn success(message: impl fmt::Display) {
    println!("{}", render(MessageKind::Success, message));
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", render(MessageKind::Warning, message));
}

pub fn error(message: impl fmt::Display) {
    println!("{}", render(MessageKind::Error, message));
}

/// Prints a raw line without a level prefix.
pub fn line(message: impl fmt::Display) {
    println!("{}", message);
}
