//! The register names the debugger understands, and how they map onto
//! the saved context.

use core::SystemContext;
use error::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Register {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    Flags,
    ControlFlags,
    Ip,
}

/// Every register with its canonical name, in context layout order.
/// Both the dump and the assignment path resolve through this table.
pub const REGISTERS: [(Register, &'static str); 11] = [
    (Register::R0, "R0"),
    (Register::R1, "R1"),
    (Register::R2, "R2"),
    (Register::R3, "R3"),
    (Register::R4, "R4"),
    (Register::R5, "R5"),
    (Register::R6, "R6"),
    (Register::R7, "R7"),
    (Register::Flags, "Flags"),
    (Register::ControlFlags, "ControlFlags"),
    (Register::Ip, "Ip"),
];

impl Register {
    /// Looks up a register by name, ignoring ASCII case.  The name has
    /// to match exactly otherwise; `R01` or ` R0` are not `R0`.
    pub fn lookup(name: &str) -> Option<Register> {
        REGISTERS
            .iter()
            .find(|&&(_, canonical)| canonical.eq_ignore_ascii_case(name))
            .map(|&(register, _)| register)
    }

    pub fn name(&self) -> &'static str {
        REGISTERS[*self as usize].1
    }
}

/// Assigns `value` to the register called `name`.  An unknown name
/// leaves the context alone.
pub fn assign(context: &mut SystemContext, name: &str, value: u64) -> Result<Register> {
    let register =
        Register::lookup(name).ok_or_else(|| ErrorKind::InvalidRegister(name.to_owned()))?;
    context.set(register, value);
    Ok(register)
}
