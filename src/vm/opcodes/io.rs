//! I/O operation handlers for the VM.
//!
//! This module provides handlers for the printing opcodes:
//! - `pall`: every value, one per line, top first
//! - `pint`: the top value
//! - `pchar`: the top value as an ASCII character
//! - `pstr`: the string spelled from the top down

use crate::bytecode::OpCode;
use crate::error::Result;
use crate::vm::{RuntimeError, Stack};
use std::io::{self, Write};

/// Handler for `pall`. Never fails on an empty stack.
pub fn op_pall<W: Write>(stack: &Stack, out: &mut W) -> io::Result<()> {
    for value in stack {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

/// Handler for `pint`.
pub fn op_pint<W: Write>(stack: &Stack, line: usize, out: &mut W) -> Result<()> {
    let value = stack.peek_top().ok_or(RuntimeError::EmptyStack {
        opcode: OpCode::Pint,
        line,
    })?;
    writeln!(out, "{}", value)?;
    Ok(())
}

/// Handler for `pchar` - prints the character followed by a newline.
///
/// The top value must be an ASCII code point (0 to 127).
pub fn op_pchar<W: Write>(stack: &Stack, line: usize, out: &mut W) -> Result<()> {
    let value = stack.peek_top().ok_or(RuntimeError::EmptyStack {
        opcode: OpCode::Pchar,
        line,
    })?;
    let byte = ascii_byte(value).ok_or(RuntimeError::ValueOutOfRange {
        opcode: OpCode::Pchar,
        line,
    })?;
    out.write_all(&[byte, b'\n'])?;
    Ok(())
}

/// Handler for `pstr`.
///
/// Prints characters from the top down, stopping at the bottom of the stack
/// or the first value outside 1..=127, then prints a newline.
pub fn op_pstr<W: Write>(stack: &Stack, out: &mut W) -> io::Result<()> {
    let mut text: Vec<u8> = stack
        .iter()
        .map_while(|&value| ascii_byte(value).filter(|&byte| byte != 0))
        .collect();
    text.push(b'\n');
    out.write_all(&text)
}

fn ascii_byte(value: i64) -> Option<u8> {
    u8::try_from(value).ok().filter(u8::is_ascii)
}
