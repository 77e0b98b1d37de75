use register::Register;

pub mod data;
mod dump;
mod exception;
mod state;
pub use self::data::CONTEXT_SIZE;
pub use self::dump::dump;
pub use self::exception::ExceptionType;
pub use self::state::VmFlags;

// Register to field, shared by the shared and mutable accessors.
macro_rules! register_slot {
    ($context:expr, $register:expr $(, $mutability:tt)*) => {
        match $register {
            Register::R0 => &$($mutability)* $context.r0,
            Register::R1 => &$($mutability)* $context.r1,
            Register::R2 => &$($mutability)* $context.r2,
            Register::R3 => &$($mutability)* $context.r3,
            Register::R4 => &$($mutability)* $context.r4,
            Register::R5 => &$($mutability)* $context.r5,
            Register::R6 => &$($mutability)* $context.r6,
            Register::R7 => &$($mutability)* $context.r7,
            Register::Flags => &$($mutability)* $context.flags,
            Register::ControlFlags => &$($mutability)* $context.control_flags,
            Register::Ip => &$($mutability)* $context.ip,
        }
    };
}

/// The saved register state of a suspended EBC virtual machine.  The
/// layout of this structure is shared with the code that resumes the
/// machine, so fields must stay in this order and at this width.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct SystemContext {
    pub r0: u64,
    pub r1: u64,
    pub r2: u64,
    pub r3: u64,
    pub r4: u64,
    pub r5: u64,
    pub r6: u64,
    pub r7: u64,
    pub flags: u64,
    pub control_flags: u64,
    pub ip: u64,
}

impl SystemContext {
    /// Reads the current value of the given register.
    pub fn get(&self, register: Register) -> u64 {
        *self.slot(register)
    }

    /// Overwrites the given register.  Any value is accepted, including
    /// ones that leave the machine in a state it cannot resume from.
    pub fn set(&mut self, register: Register, value: u64) {
        *self.slot_mut(register) = value;
    }

    fn slot(&self, register: Register) -> &u64 {
        register_slot!(self, register)
    }

    fn slot_mut(&mut self, register: Register) -> &mut u64 {
        register_slot!(self, register, mut)
    }

    /// The `Flags` word, viewed as VM flags.  Bits the VM does not
    /// define are left out of the view; the word itself is untouched.
    pub fn vm_flags(&self) -> VmFlags {
        VmFlags::from_bits_truncate(self.flags)
    }
}
