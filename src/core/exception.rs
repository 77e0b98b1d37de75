const EXCEPT_EBC_UNDEFINED: u32 = 0;
const EXCEPT_EBC_DIVIDE_ERROR: u32 = 1;
const EXCEPT_EBC_DEBUG: u32 = 2;
const EXCEPT_EBC_BREAKPOINT: u32 = 3;
const EXCEPT_EBC_OVERFLOW: u32 = 4;
const EXCEPT_EBC_INVALID_OPCODE: u32 = 5;
const EXCEPT_EBC_STACK_FAULT: u32 = 6;
const EXCEPT_EBC_ALIGNMENT_CHECK: u32 = 7;
const EXCEPT_EBC_INSTRUCTION_ENCODING: u32 = 8;
const EXCEPT_EBC_BAD_BREAK: u32 = 9;
const EXCEPT_EBC_SINGLE_STEP: u32 = 10;

/// The reason the virtual machine trapped into the debugger.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExceptionType {
    /// The trap has no known cause.
    Undefined,
    /// The VM executed a divide by zero.
    DivideError,
    /// A debug event was raised.
    Debug,
    /// The VM hit a BREAK 3 instruction.
    Breakpoint,
    /// An arithmetic overflow.
    Overflow,
    /// The VM fetched an opcode it does not know.
    InvalidOpcode,
    /// The VM stack over- or underflowed.
    StackFault,
    /// An unaligned access.
    AlignmentCheck,
    /// An instruction with a malformed encoding.
    InstructionEncoding,
    /// A BREAK instruction with an unknown break code.
    BadBreak,
    /// The VM completed a single step.
    SingleStep,
    /// Any value outside the EBC exception range.
    Invalid(u32),
}

impl Into<u32> for ExceptionType {
    fn into(self) -> u32 {
        match self {
            ExceptionType::Undefined => EXCEPT_EBC_UNDEFINED,
            ExceptionType::DivideError => EXCEPT_EBC_DIVIDE_ERROR,
            ExceptionType::Debug => EXCEPT_EBC_DEBUG,
            ExceptionType::Breakpoint => EXCEPT_EBC_BREAKPOINT,
            ExceptionType::Overflow => EXCEPT_EBC_OVERFLOW,
            ExceptionType::InvalidOpcode => EXCEPT_EBC_INVALID_OPCODE,
            ExceptionType::StackFault => EXCEPT_EBC_STACK_FAULT,
            ExceptionType::AlignmentCheck => EXCEPT_EBC_ALIGNMENT_CHECK,
            ExceptionType::InstructionEncoding => EXCEPT_EBC_INSTRUCTION_ENCODING,
            ExceptionType::BadBreak => EXCEPT_EBC_BAD_BREAK,
            ExceptionType::SingleStep => EXCEPT_EBC_SINGLE_STEP,
            ExceptionType::Invalid(v) => v,
        }
    }
}

impl From<u32> for ExceptionType {
    fn from(value: u32) -> ExceptionType {
        match value {
            EXCEPT_EBC_UNDEFINED => ExceptionType::Undefined,
            EXCEPT_EBC_DIVIDE_ERROR => ExceptionType::DivideError,
            EXCEPT_EBC_DEBUG => ExceptionType::Debug,
            EXCEPT_EBC_BREAKPOINT => ExceptionType::Breakpoint,
            EXCEPT_EBC_OVERFLOW => ExceptionType::Overflow,
            EXCEPT_EBC_INVALID_OPCODE => ExceptionType::InvalidOpcode,
            EXCEPT_EBC_STACK_FAULT => ExceptionType::StackFault,
            EXCEPT_EBC_ALIGNMENT_CHECK => ExceptionType::AlignmentCheck,
            EXCEPT_EBC_INSTRUCTION_ENCODING => ExceptionType::InstructionEncoding,
            EXCEPT_EBC_BAD_BREAK => ExceptionType::BadBreak,
            EXCEPT_EBC_SINGLE_STEP => ExceptionType::SingleStep,
            v => ExceptionType::Invalid(v),
        }
    }
}
