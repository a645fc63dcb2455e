//! Runtime diagnostics.
//!
//! Every variant is fatal to the run. `Display` renders the exact
//! diagnostic line (without the trailing newline) printed to stderr.

use crate::bytecode::OpCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("L{line}: unknown instruction {mnemonic}")]
    UnknownInstruction { mnemonic: String, line: usize },

    #[error("L{line}: usage: push integer")]
    MissingOrInvalidArgument { line: usize },

    #[error("L{line}: can't {opcode}, stack too short")]
    StackTooShort { opcode: OpCode, line: usize },

    #[error("L{line}: division by 0")]
    DivisionByZero { opcode: OpCode, line: usize },

    #[error("L{line}: {}", empty_stack_message(.opcode))]
    EmptyStack { opcode: OpCode, line: usize },

    #[error("L{line}: can't {opcode}, value out of range")]
    ValueOutOfRange { opcode: OpCode, line: usize },
}

impl RuntimeError {
    /// Line of the instruction that failed.
    pub fn line(&self) -> usize {
        match self {
            RuntimeError::UnknownInstruction { line, .. }
            | RuntimeError::MissingOrInvalidArgument { line }
            | RuntimeError::StackTooShort { line, .. }
            | RuntimeError::DivisionByZero { line, .. }
            | RuntimeError::EmptyStack { line, .. }
            | RuntimeError::ValueOutOfRange { line, .. } => *line,
        }
    }
}

fn empty_stack_message(opcode: &OpCode) -> String {
    match opcode {
        OpCode::Pop => "can't pop an empty stack".to_string(),
        other => format!("can't {}, stack empty", other),
    }
}
