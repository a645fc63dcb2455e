//! Line-oriented reading of Monty scripts.
//!
//! A script is consumed one physical line at a time. Blank lines and lines
//! whose first token is a comment produce no instruction but still advance
//! the line counter, so diagnostics always name the line in the file.

use crate::token::Token;
use logos::Logos;
use std::io::{self, BufRead};
use tracing::trace;

/// One instruction line: a mnemonic, its optional argument and the
/// 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: String,
    pub argument: Option<String>,
    pub line: usize,
}

impl Instruction {
    pub fn new(mnemonic: &str, argument: Option<&str>, line: usize) -> Self {
        Instruction {
            mnemonic: mnemonic.to_string(),
            argument: argument.map(str::to_string),
            line,
        }
    }
}

/// Split a line into mnemonic and argument.
///
/// Returns `None` for blank and comment lines. Anything after the argument
/// is ignored.
pub fn parse_line(text: &str, line: usize) -> Option<Instruction> {
    let mut tokens = Token::lexer(text).filter_map(Result::ok);
    let mnemonic = match tokens.next()? {
        Token::Word(word) => word,
        Token::Comment => return None,
    };
    let argument = match tokens.next() {
        Some(Token::Word(word)) => Some(word),
        _ => None,
    };
    Some(Instruction {
        mnemonic,
        argument,
        line,
    })
}

/// Parse a `push` argument: an optional sign followed by at least one
/// ASCII digit. Values that do not fit in an `i64` are rejected.
pub fn parse_integer(token: &str) -> Option<i64> {
    let digits = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<i64>().ok()
}

/// Lazily yields the instructions of a script, reading a line only when
/// the previous instruction has been handed out.
pub struct Instructions<R> {
    reader: R,
    line: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> Instructions<R> {
    pub fn new(reader: R) -> Self {
        Instructions {
            reader,
            line: 0,
            buffer: Vec::new(),
        }
    }

    /// Helper for testing to inspect the number of physical lines read so far.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for Instructions<R> {
    type Item = io::Result<Instruction>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let text = String::from_utf8_lossy(&self.buffer);
                    if let Some(instruction) = parse_line(&text, self.line) {
                        return Some(Ok(instruction));
                    }
                    trace!(line = self.line, "skipping blank or comment line");
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
