use super::register::parse_register;
use crate::{error::ErrorKind, instruction::Register, lexer::parse_word};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum UnresolvedSource<'a> {
    Value(i32),
    Variable(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum UnresolvedInstruction<'a> {
    Mov(Register, UnresolvedSource<'a>),
    Add(Register, Register),
    Sub(Register, Register),
    Mul(Register),
    Nop,
    Exit,
}

fn operand<'a>(tokens: &[&'a str], index: usize, operands: usize) -> Result<&'a str, ErrorKind> {
    tokens
        .get(index)
        .copied()
        .ok_or_else(|| ErrorKind::MalformedInstruction {
            opcode: tokens.first().map_or("", |t| *t).to_owned(),
            operands,
        })
}

fn parse_register_operand(
    tokens: &[&str],
    index: usize,
    operands: usize,
) -> Result<Register, ErrorKind> {
    let token = operand(tokens, index, operands)?;
    parse_register(token).ok_or_else(|| ErrorKind::UnknownRegister(token.to_owned()))
}

fn parse_source<'a>(
    tokens: &[&'a str],
    index: usize,
    operands: usize,
) -> Result<UnresolvedSource<'a>, ErrorKind> {
    let token = operand(tokens, index, operands)?;

    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        parse_word(token)
            .map(UnresolvedSource::Value)
            .ok_or_else(|| ErrorKind::InvalidImmediate(token.to_owned()))
    } else {
        Ok(UnresolvedSource::Variable(token))
    }
}

impl UnresolvedInstruction<'_> {
    /// Decodes one line's tokens. Operands are checked left to right, so an
    /// unknown register is reported before a missing operand after it. Tokens
    /// past the operands an opcode takes are ignored.
    pub(super) fn parse<'a>(tokens: &[&'a str]) -> Result<UnresolvedInstruction<'a>, ErrorKind> {
        let mnemonic = match tokens.first() {
            Some(token) => token.to_lowercase(),
            None => return Err(ErrorKind::EmptyInstruction),
        };
        let mut arg_number = 0;

        macro_rules! register {
            ($operands:expr) => {{
                arg_number += 1;
                parse_register_operand(tokens, arg_number, $operands)?
            }};
        }

        macro_rules! source {
            ($operands:expr) => {{
                arg_number += 1;
                parse_source(tokens, arg_number, $operands)?
            }};
        }

        macro_rules! instr {
            ($mnemonic:literal, $instruction:ident, $operands:literal, $($arg:ident),+) => {
                if mnemonic == $mnemonic {
                    return Ok(UnresolvedInstruction::$instruction($($arg!($operands)),+));
                }
            };
        }

        if mnemonic == "call" {
            return match operand(tokens, 1, 1)? {
                target if target.eq_ignore_ascii_case("exitprocess") => {
                    Ok(UnresolvedInstruction::Exit)
                }
                _ => Ok(UnresolvedInstruction::Nop),
            };
        }

        instr!("mov", Mov, 2, register, source);
        instr!("add", Add, 2, register, register);
        instr!("sub", Sub, 2, register, register);
        instr!("mul", Mul, 1, register);

        Ok(UnresolvedInstruction::Nop)
    }
}
