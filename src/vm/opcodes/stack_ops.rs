//! Stack manipulation handlers: `push`, `pop`, `swap`, `nop`, `rotl`, `rotr`.

use crate::bytecode::OpCode;
use crate::parser::parse_integer;
use crate::vm::{RuntimeError, Stack};

/// Handle `push` - parse the argument and put it on top of the stack.
pub fn op_push(stack: &mut Stack, argument: Option<&str>, line: usize) -> Result<(), RuntimeError> {
    let value = argument
        .and_then(parse_integer)
        .ok_or(RuntimeError::MissingOrInvalidArgument { line })?;
    stack.push_front(value);
    Ok(())
}

/// Handle `pop` - discard the top value.
pub fn op_pop(stack: &mut Stack, line: usize) -> Result<(), RuntimeError> {
    stack
        .pop_front()
        .map(|_| ())
        .ok_or(RuntimeError::EmptyStack {
            opcode: OpCode::Pop,
            line,
        })
}

/// Handle `swap` - exchange the values of the top two elements.
pub fn op_swap(stack: &mut Stack, line: usize) -> Result<(), RuntimeError> {
    if stack.len() < 2 {
        return Err(RuntimeError::StackTooShort {
            opcode: OpCode::Swap,
            line,
        });
    }
    stack.swap_top();
    Ok(())
}

/// Handle `nop`.
pub fn op_nop(_stack: &mut Stack) {}

/// Handle `rotl` - the top value becomes the bottom one.
pub fn op_rotl(stack: &mut Stack) {
    stack.rotate_left();
}

/// Handle `rotr` - the bottom value becomes the top one.
pub fn op_rotr(stack: &mut Stack) {
    stack.rotate_right();
}
