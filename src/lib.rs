pub mod bytecode;
pub mod cli;
pub mod error;
pub mod parser;
pub mod token;
pub mod vm;
