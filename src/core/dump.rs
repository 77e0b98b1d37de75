use super::SystemContext;
use error::Result;
use register::Register;
use std::io::Write;

/// Display rows of the register dump, in print order.
const ROWS: [&'static [Register]; 6] = [
    &[Register::R0, Register::R1],
    &[Register::R2, Register::R3],
    &[Register::R4, Register::R5],
    &[Register::R6, Register::R7],
    &[Register::Flags, Register::ControlFlags],
    &[Register::Ip],
];

/// Prints every register of the context, six lines, two values a line.
pub fn dump<W: Write + ?Sized>(context: &SystemContext, out: &mut W) -> Result<()> {
    for row in ROWS.iter() {
        let mut line = String::from(" ");
        for (i, &register) in row.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push_str(&format!(
                " {} - 0x{:016x}",
                register.name(),
                context.get(register)
            ));
        }
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
