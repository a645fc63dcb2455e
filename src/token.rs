use logos::Logos;

/// Tokens found on a single line of a Monty script.
/// The `#[derive(Logos)]` macro from the `logos` crate generates the lexer implementation.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")] // Ignore whitespace
pub enum Token {
    // A `#` opening a token comments out the rest of the line.
    #[regex(r"#[^\n]*")]
    Comment,

    // Mnemonics and arguments alike; the parser decides which is which.
    #[regex(r"[^ \t\r\n\x0B\x0C#][^ \t\r\n\x0B\x0C]*", |lex| lex.slice().to_string())]
    Word(String),
}
