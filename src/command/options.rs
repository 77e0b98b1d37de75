/// How the text of a register value is turned into a number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValuePolicy {
    /// Hexadecimal digits only, with an optional `0x` prefix, at most
    /// sixteen significant digits.  Anything else is rejected and the
    /// register is left alone.
    Strict,
    /// Best effort: leading zeros and an `x` are skipped, digits are
    /// read up to the first non-hex character, and the result pins to
    /// all ones if it would not fit.  Text without digits yields zero.
    Lenient,
}

impl Default for ValuePolicy {
    fn default() -> ValuePolicy {
        ValuePolicy::Strict
    }
}

/// Settings for a debugger session.  Built the usual way:
///
/// ```
/// use ebc_debugger::command::{DebuggerOptions, ValuePolicy};
///
/// let mut options = DebuggerOptions::new();
/// options.value_policy(ValuePolicy::Lenient).log_writes(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebuggerOptions {
    pub(crate) value_policy: ValuePolicy,
    pub(crate) log_writes: bool,
}

impl DebuggerOptions {
    /// Strict value parsing, with register writes logged at `debug`.
    pub fn new() -> DebuggerOptions {
        DebuggerOptions {
            value_policy: ValuePolicy::default(),
            log_writes: true,
        }
    }

    /// Sets how register values typed by the user are parsed.  See
    /// [`ValuePolicy`].
    pub fn value_policy(&mut self, policy: ValuePolicy) -> &mut Self {
        self.value_policy = policy;
        self
    }

    /// Sets whether a successful register write is logged.  Rejected
    /// input is always logged.
    pub fn log_writes(&mut self, enabled: bool) -> &mut Self {
        self.log_writes = enabled;
        self
    }
}

impl Default for DebuggerOptions {
    fn default() -> DebuggerOptions {
        DebuggerOptions::new()
    }
}
