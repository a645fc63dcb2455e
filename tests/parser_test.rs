use monty::parser::{parse_integer, parse_line, Instruction, Instructions};
use std::io::Cursor;

#[test]
fn parse_line_splits_mnemonic_and_argument() {
    assert_eq!(
        parse_line("push 42\n", 3),
        Some(Instruction::new("push", Some("42"), 3))
    );
    assert_eq!(parse_line("   pall", 1), Some(Instruction::new("pall", None, 1)));
}

#[test]
fn parse_line_ignores_trailing_tokens() {
    assert_eq!(
        parse_line("push 1 2 3", 1),
        Some(Instruction::new("push", Some("1"), 1))
    );
    assert_eq!(
        parse_line("push 1 # one", 1),
        Some(Instruction::new("push", Some("1"), 1))
    );
}

#[test]
fn parse_line_treats_comment_argument_as_missing() {
    assert_eq!(
        parse_line("push #1", 2),
        Some(Instruction::new("push", None, 2))
    );
}

#[test]
fn parse_line_skips_blank_and_comment_lines() {
    assert_eq!(parse_line("", 1), None);
    assert_eq!(parse_line("   \t\n", 1), None);
    assert_eq!(parse_line("# comment", 1), None);
    assert_eq!(parse_line("   #push 1", 1), None);
}

#[test]
fn parse_integer_accepts_signed_decimal() {
    assert_eq!(parse_integer("0"), Some(0));
    assert_eq!(parse_integer("-17"), Some(-17));
    assert_eq!(parse_integer("+17"), Some(17));
    assert_eq!(parse_integer("007"), Some(7));
    assert_eq!(parse_integer("9223372036854775807"), Some(i64::MAX));
    assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN));
}

#[test]
fn parse_integer_rejects_everything_else() {
    for token in ["", "-", "+", "--1", "+-1", "1a", "a1", "1.5", "0x10", " 1", "9223372036854775808"] {
        assert_eq!(parse_integer(token), None, "token {:?}", token);
    }
}

#[test]
fn instructions_count_every_physical_line() {
    let source = "# header\n\npush 1\n   \npall\n";
    let instructions: Vec<Instruction> = Instructions::new(Cursor::new(source))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        instructions,
        vec![
            Instruction::new("push", Some("1"), 3),
            Instruction::new("pall", None, 5),
        ]
    );
}

#[test]
fn instructions_handle_missing_final_newline_and_crlf() {
    let source = "push 1\r\npint";
    let instructions: Vec<Instruction> = Instructions::new(Cursor::new(source))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        instructions,
        vec![
            Instruction::new("push", Some("1"), 1),
            Instruction::new("pint", None, 2),
        ]
    );
}

#[test]
fn instructions_tolerate_invalid_utf8() {
    let source: &[u8] = b"nop \xff\xfe\npall\n";
    let mut instructions = Instructions::new(Cursor::new(source));
    let first = instructions.next().unwrap().unwrap();
    assert_eq!(first.mnemonic, "nop");
    assert_eq!(first.line, 1);
    assert_eq!(instructions.next().unwrap().unwrap().mnemonic, "pall");
    assert!(instructions.next().is_none());
    assert_eq!(instructions.line(), 2);
}
