use std::fmt;

/// The instructions understood by the Monty machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// Pushes the integer argument onto the stack.
    Push,
    /// Prints every value, top first.
    Pall,
    /// Prints the top value.
    Pint,
    /// Removes the top value.
    Pop,
    /// Swaps the top two values.
    Swap,
    /// Replaces the top two values with their sum.
    Add,
    /// Does nothing.
    Nop,
    /// Replaces the top two values with the second minus the top.
    Sub,
    /// Replaces the top two values with the second divided by the top.
    Div,
    /// Replaces the top two values with their product.
    Mul,
    /// Replaces the top two values with the second modulo the top.
    Mod,
    /// Prints the top value as an ASCII character.
    Pchar,
    /// Prints the string spelled by the values from the top down.
    Pstr,
    /// Moves the top value to the bottom.
    Rotl,
    /// Moves the bottom value to the top.
    Rotr,
}

/// Mnemonic table in registration order. Lookup scans it front to back.
pub const MNEMONICS: [(&str, OpCode); 15] = [
    ("push", OpCode::Push),
    ("pall", OpCode::Pall),
    ("pint", OpCode::Pint),
    ("pop", OpCode::Pop),
    ("swap", OpCode::Swap),
    ("add", OpCode::Add),
    ("nop", OpCode::Nop),
    ("sub", OpCode::Sub),
    ("div", OpCode::Div),
    ("mul", OpCode::Mul),
    ("mod", OpCode::Mod),
    ("pchar", OpCode::Pchar),
    ("pstr", OpCode::Pstr),
    ("rotl", OpCode::Rotl),
    ("rotr", OpCode::Rotr),
];

impl OpCode {
    /// Exact, case-sensitive lookup of a mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<OpCode> {
        MNEMONICS
            .iter()
            .find(|(name, _)| *name == mnemonic)
            .map(|(_, opcode)| *opcode)
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::Push => "push",
            OpCode::Pall => "pall",
            OpCode::Pint => "pint",
            OpCode::Pop => "pop",
            OpCode::Swap => "swap",
            OpCode::Add => "add",
            OpCode::Nop => "nop",
            OpCode::Sub => "sub",
            OpCode::Div => "div",
            OpCode::Mul => "mul",
            OpCode::Mod => "mod",
            OpCode::Pchar => "pchar",
            OpCode::Pstr => "pstr",
            OpCode::Rotl => "rotl",
            OpCode::Rotr => "rotr",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
