//! Opcode handler modules
//!
//! This module organizes opcode implementations into logical categories.
//! Every handler takes the operand stack and the current line; handlers
//! that print also take the output stream.

pub mod arithmetic;
pub mod io;
pub mod stack_ops;
