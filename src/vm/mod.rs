pub mod error;
mod opcode_dispatcher;
pub mod opcodes;
pub mod stack_ops;

use crate::bytecode::OpCode;
use crate::error::Result;
use crate::parser::{Instruction, Instructions};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub use error::RuntimeError;
pub use stack_ops::Stack;

/// The Monty machine: a single operand stack driven one instruction at a time.
pub struct VM {
    stack: Stack,
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}

impl VM {
    pub fn new() -> Self {
        VM {
            stack: Stack::new(),
        }
    }

    /// Start from an existing stack (values listed top first).
    pub fn with_stack(stack: Stack) -> Self {
        VM { stack }
    }

    /// Run a whole script, stopping at the first error.
    ///
    /// Lines are read lazily, so everything written to `out` before a failure
    /// belongs to the lines preceding it. The stack is left as the last
    /// executed instruction found it; callers release it with
    /// [`VM::release_stack`].
    pub fn interpret<R, W>(&mut self, reader: R, out: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        debug!("run started");
        let result = self.run(Instructions::new(reader), out);
        debug!(ok = result.is_ok(), depth = self.stack.len(), "run finished");
        result
    }

    fn run<I, W>(&mut self, instructions: I, out: &mut W) -> Result<()>
    where
        I: Iterator<Item = io::Result<Instruction>>,
        W: Write,
    {
        for instruction in instructions {
            let instruction = instruction?;
            self.execute(&instruction, out)?;
        }
        Ok(())
    }

    /// Look up an instruction's mnemonic and run its handler.
    pub fn execute<W: Write>(&mut self, instruction: &Instruction, out: &mut W) -> Result<()> {
        let opcode = OpCode::from_mnemonic(&instruction.mnemonic).ok_or_else(|| {
            RuntimeError::UnknownInstruction {
                mnemonic: instruction.mnemonic.clone(),
                line: instruction.line,
            }
        })?;
        debug!(
            line = instruction.line,
            opcode = opcode.mnemonic(),
            depth = self.stack.len(),
            "dispatch"
        );
        self.dispatch_opcode(
            opcode,
            instruction.argument.as_deref(),
            instruction.line,
            out,
        )
    }
}
