//! Opcode dispatching for the VM.
//!
//! Routes a decoded opcode to its handler in `opcodes`, handing over the
//! single operand stack and, for printing opcodes, the output stream.

use super::VM;
use crate::bytecode::OpCode;
use crate::error::Result;
use crate::vm::opcodes;
use std::io::Write;

impl VM {
    /// Dispatch and execute a single opcode instruction.
    pub(super) fn dispatch_opcode<W: Write>(
        &mut self,
        opcode: OpCode,
        argument: Option<&str>,
        line: usize,
        out: &mut W,
    ) -> Result<()> {
        let stack = &mut self.stack;
        match opcode {
            OpCode::Push => opcodes::stack_ops::op_push(stack, argument, line)?,
            OpCode::Pall => opcodes::io::op_pall(stack, out)?,
            OpCode::Pint => opcodes::io::op_pint(stack, line, out)?,
            OpCode::Pop => opcodes::stack_ops::op_pop(stack, line)?,
            OpCode::Swap => opcodes::stack_ops::op_swap(stack, line)?,
            OpCode::Add => opcodes::arithmetic::op_add(stack, line)?,
            OpCode::Nop => opcodes::stack_ops::op_nop(stack),
            OpCode::Sub => opcodes::arithmetic::op_sub(stack, line)?,
            OpCode::Div => opcodes::arithmetic::op_div(stack, line)?,
            OpCode::Mul => opcodes::arithmetic::op_mul(stack, line)?,
            OpCode::Mod => opcodes::arithmetic::op_mod(stack, line)?,
            OpCode::Pchar => opcodes::io::op_pchar(stack, line, out)?,
            OpCode::Pstr => opcodes::io::op_pstr(stack, out)?,
            OpCode::Rotl => opcodes::stack_ops::op_rotl(stack),
            OpCode::Rotr => opcodes::stack_ops::op_rotr(stack),
        }
        Ok(())
    }
}
