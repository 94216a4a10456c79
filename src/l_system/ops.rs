//! The operation mini-language consumed by the interpreter.
//!
//! An operation-table entry is a whitespace-separated instruction list: each
//! instruction is an opcode followed by its fixed-arity operands, e.g.
//! `"draw #000000ff 1 5 rotate 45"`. Opcodes: `push` (0), `pop` (0),
//! `rotate` (1: degrees), `move` (1: distance), `draw` (3: color, width,
//! length). Colors are `#rrggbbaa` literals. Operation tables are static
//! configuration, so any malformed token is an error, never a default.
use crate::errors::LSystemError;
use image::Rgba;

/// One resolved pen instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Push,
    Pop,
    Rotate(f64),
    Move(f64),
    Draw {
        color: Rgba<u8>,
        width: f64,
        length: f64,
    },
}

/// Parse a full operation-table entry into its instruction list.
pub fn parse_program(src: &str) -> Result<Vec<Command>, LSystemError> {
    let tokens: Vec<&str> = src.split_whitespace().collect();
    let mut commands = vec![];
    let mut idx = 0;
    while idx < tokens.len() {
        let (command, consumed) = parse_one(&tokens, idx)?;
        commands.push(command);
        idx += consumed;
    }
    Ok(commands)
}

/// Consume one opcode plus its operands starting at `idx`, returning the
/// command and the number of tokens consumed.
fn parse_one(tokens: &[&str], idx: usize) -> Result<(Command, usize), LSystemError> {
    let opcode = tokens[idx];
    let operand = |n: usize| -> Result<&str, LSystemError> {
        tokens.get(idx + 1 + n).copied().ok_or_else(|| {
            LSystemError::MissingOperand {
                opcode: opcode.to_string(),
                expected: arity(opcode),
                found: tokens.len() - idx - 1,
            }
        })
    };
    match opcode {
        "push" => Ok((Command::Push, 1)),
        "pop" => Ok((Command::Pop, 1)),
        "rotate" => Ok((Command::Rotate(parse_f64(operand(0)?)?), 2)),
        "move" => Ok((Command::Move(parse_f64(operand(0)?)?), 2)),
        "draw" => Ok((
            Command::Draw {
                color: parse_color(operand(0)?)?,
                width: parse_f64(operand(1)?)?,
                length: parse_f64(operand(2)?)?,
            },
            4,
        )),
        other => Err(LSystemError::UnknownOpcode(other.to_string())),
    }
}

fn arity(opcode: &str) -> usize {
    match opcode {
        "rotate" | "move" => 1,
        "draw" => 3,
        _ => 0,
    }
}

fn parse_f64(tok: &str) -> Result<f64, LSystemError> {
    tok.parse::<f64>()
        .map_err(|_| LSystemError::MalformedNumber(tok.to_string()))
}

/// Parse a `#rrggbbaa` literal: exactly nine characters, each hex pair an
/// independent 8-bit channel.
pub fn parse_color(tok: &str) -> Result<Rgba<u8>, LSystemError> {
    let malformed = || LSystemError::MalformedColor(tok.to_string());
    let digits = tok.strip_prefix('#').ok_or_else(malformed)?;
    if !digits.is_ascii() || digits.len() != 8 {
        return Err(malformed());
    }
    let pair = |i: usize| u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).map_err(|_| malformed());
    Ok(Rgba([pair(0)?, pair(1)?, pair(2)?, pair(3)?]))
}
