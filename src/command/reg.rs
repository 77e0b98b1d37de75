use super::{value, DebugStatus, DebuggerPrivate, TokenLine, ValuePolicy};
use core::{ExceptionType, SystemContext};
use error::*;
use register::{self, Register};

/// The `r` command.  With no argument, prints every register.  With a
/// register name as `arg`, reads a value from the rest of `line` and
/// stores it in that register.
///
/// Bad input is reported on the debugger output and leaves `context`
/// untouched.  The session always continues.
pub fn register(
    arg: Option<&str>,
    line: &mut TokenLine,
    debugger: &mut DebuggerPrivate,
    _exception: ExceptionType,
    context: &mut SystemContext,
) -> DebugStatus {
    let name = match arg {
        Some(name) => name,
        None => {
            debug!("printing registers, ip = {:#018x}", context.ip);
            debugger.print_registers(context);
            return DebugStatus::Continue;
        }
    };

    let (policy, log_writes) = {
        let options = debugger.options();
        (options.value_policy, options.log_writes)
    };

    match assign_from_line(name, line, policy, context) {
        Ok((register, value)) => {
            if log_writes {
                debug!("set {} to {:#018x}", register.name(), value);
            }
        }
        Err(err) => {
            warn!("register command rejected `{}': {}", name, err);
            debugger.report(&err);
        }
    }

    DebugStatus::Continue
}

// The value is resolved before the name, so a bare unknown name reports
// a missing value.
fn assign_from_line(
    name: &str,
    line: &mut TokenLine,
    policy: ValuePolicy,
    context: &mut SystemContext,
) -> Result<(Register, u64)> {
    let text = line
        .next_token()
        .ok_or_else(|| Error::from(ErrorKind::InvalidRegisterValue))?;
    let value = value::parse_value(text, policy)?;
    let register = register::assign(context, name, value)?;
    Ok((register, value))
}
