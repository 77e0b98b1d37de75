//! Debugger commands that work on a trapped machine's saved context.

use core::{self, ExceptionType, SystemContext};
use error::Error;
use std::io::Write;

mod options;
mod reg;
mod token;
mod value;
pub use self::options::{DebuggerOptions, ValuePolicy};
pub use self::reg::register;
pub use self::token::TokenLine;
pub use self::value::parse_value;

/// What the debugger should do once a command has finished.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DebugStatus {
    /// Leave the debugger and resume the machine.
    Return = 1,
    /// Stop at the next instruction.
    Break = 2,
    /// Stay in the debugger and read the next command.
    Continue = 3,
}

/// The debugger state a command may use: where to print, and how the
/// session was configured.  The output is borrowed from whoever drives
/// the read-eval loop.
pub struct DebuggerPrivate<'o> {
    output: &'o mut dyn Write,
    options: DebuggerOptions,
}

impl<'o> DebuggerPrivate<'o> {
    pub fn new(output: &'o mut dyn Write, options: DebuggerOptions) -> DebuggerPrivate<'o> {
        DebuggerPrivate { output, options }
    }

    pub fn options(&self) -> &DebuggerOptions {
        &self.options
    }

    pub(crate) fn print_registers(&mut self, context: &SystemContext) {
        if let Err(e) = core::dump(context, &mut *self.output) {
            error!("could not print registers: {}", e);
        }
    }

    /// Prints an error as a diagnostic line.  Errors never leave a
    /// command; this is where they end up.
    pub(crate) fn report(&mut self, err: &Error) {
        if let Err(e) = writeln!(self.output, "{}", err) {
            error!("could not print diagnostic `{}': {}", err, e);
        }
    }
}

pub type CommandHandler = fn(
    Option<&str>,
    &mut TokenLine,
    &mut DebuggerPrivate,
    ExceptionType,
    &mut SystemContext,
) -> DebugStatus;

/// One row of the debugger's command table.
#[derive(Copy, Clone)]
pub struct CommandEntry {
    pub name: &'static str,
    pub help: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    /// Whether `name`, as typed, selects this command.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

pub const REGISTER_COMMAND: CommandEntry = CommandEntry {
    name: "r",
    help: "display/modify register",
    usage: "R [<Register> <Value>]",
    handler: register,
};
