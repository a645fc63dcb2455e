//! Arithmetic handlers.
//!
//! Each one combines the second value (left operand) with the top value
//! (right operand), pops the top and stores the result in the new top.
//! `add`, `sub` and `mul` wrap on overflow. `div` truncates toward zero and
//! `mod` takes the sign of the dividend.

use crate::bytecode::OpCode;
use crate::vm::{RuntimeError, Stack};

fn binary_op<F>(stack: &mut Stack, opcode: OpCode, line: usize, op: F) -> Result<(), RuntimeError>
where
    F: FnOnce(i64, i64) -> Result<i64, RuntimeError>,
{
    let (top, second) = match (stack.peek_top(), stack.peek_second()) {
        (Some(top), Some(second)) => (top, second),
        _ => return Err(RuntimeError::StackTooShort { opcode, line }),
    };
    let result = op(second, top)?;
    stack.pop_front();
    if let Some(slot) = stack.top_mut() {
        *slot = result;
    }
    Ok(())
}

/// Handle `add` - second + top
pub fn op_add(stack: &mut Stack, line: usize) -> Result<(), RuntimeError> {
    binary_op(stack, OpCode::Add, line, |a, b| Ok(a.wrapping_add(b)))
}

/// Handle `sub` - second - top
pub fn op_sub(stack: &mut Stack, line: usize) -> Result<(), RuntimeError> {
    binary_op(stack, OpCode::Sub, line, |a, b| Ok(a.wrapping_sub(b)))
}

/// Handle `mul` - second * top
pub fn op_mul(stack: &mut Stack, line: usize) -> Result<(), RuntimeError> {
    binary_op(stack, OpCode::Mul, line, |a, b| Ok(a.wrapping_mul(b)))
}

/// Handle `div` - second / top
pub fn op_div(stack: &mut Stack, line: usize) -> Result<(), RuntimeError> {
    binary_op(stack, OpCode::Div, line, |a, b| {
        if b == 0 {
            return Err(RuntimeError::DivisionByZero {
                opcode: OpCode::Div,
                line,
            });
        }
        Ok(a.wrapping_div(b))
    })
}

/// Handle `mod` - second % top
pub fn op_mod(stack: &mut Stack, line: usize) -> Result<(), RuntimeError> {
    binary_op(stack, OpCode::Mod, line, |a, b| {
        if b == 0 {
            return Err(RuntimeError::DivisionByZero {
                opcode: OpCode::Mod,
                line,
            });
        }
        Ok(a.wrapping_rem(b))
    })
}
