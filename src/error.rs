use std::io;
use thiserror::Error;

/// Errors that can occur while loading a program.
///
/// All of these terminate the run; an unrecognized opcode is deliberately
/// not among them (it decodes to a no-op).
#[derive(Error, Debug)]
pub enum InterpreterError {
    /// A symbolic register name not present in the name table.
    #[error("Unknown register {0:?}")]
    UnknownRegister(String),

    /// An immediate operand that does not parse as an integer.
    #[error("Malformed operand {0:?}")]
    MalformedOperand(String),

    /// A line with fewer operand tokens than its opcode requires.
    #[error("{opcode} expects at least {expected} operands, found {found}")]
    OperandCount {
        opcode: String,
        expected: usize,
        found: usize,
    },

    /// Reading the source listing failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
