//! Assembler for the [vcpu](../vcpu/index.html) virtual processor.
//!
//! [`assemble`] is a single-pass, line-oriented translator from the
//! machine's assembly language straight to its wire-form instruction
//! words — no labels, no sections, no forward references. Each line names
//! an opcode and up to three operands; operand 1 seeds both the source and
//! destination register if it looks like one, operand 2 overrides the
//! source, and whichever remaining token isn't a register is the
//! immediate.
//!
//! ```
//! let image = vasm::assemble("LoadImmediate r0 42\nHalt\n").unwrap();
//! assert_eq!(image.len(), 2);
//! ```

pub mod error;
pub mod opcodes;

pub use error::AssembleError;

use vcpu::{encode, DecodedOpcode, Instruction, Word};

/// An assembled program: one word per instruction, in source order.
pub type Image = Vec<Word>;

/// Assembles `source` into an [`Image`].
///
/// A pure function of its input text: the same source always produces the
/// same image. Blank lines and lines whose first token starts with `;` are
/// comments and don't consume an output slot. The only error this can
/// return is an unrecognized opcode name; malformed operands are lenient
/// and degrade to zero (see [`parse_register`] and [`parse_immediate`]).
pub fn assemble(source: &str) -> Result<Image, AssembleError> {
    let mut image = Image::new();
    let mut instruction_index = 0usize;

    for line in source.lines() {
        let tokens: Vec<&str> = line.split_whitespace().take(4).collect();
        let mnemonic = match tokens.first() {
            Some(token) if !token.is_empty() && !token.starts_with(';') => *token,
            _ => continue,
        };

        let opcode = opcodes::lookup(mnemonic).ok_or_else(|| AssembleError::UnrecognizedOpcode {
            instruction_index,
            name: mnemonic.to_string(),
        })?;

        let (src, dst, imm) = parse_operands(&tokens[1..]);

        image.push(encode(Instruction::new(
            DecodedOpcode::Known(opcode),
            src,
            dst,
            imm,
        )));
        instruction_index += 1;
    }

    Ok(image)
}

/// Resolves the (src, dst, imm) triple from up to three operand tokens,
/// per the position-aware register / position-oblivious immediate rule:
/// operand 1 seeds both `src` and `dst` if it's a register, operand 2
/// overrides `src` if it's a register, and the last non-register,
/// non-empty token in positions 1..3 is the immediate.
fn parse_operands(operands: &[&str]) -> (u8, u8, i8) {
    let mut src: u8 = 0;
    let mut dst: u8 = 0;
    let mut imm: i8 = 0;

    for (position, operand) in operands.iter().enumerate() {
        if operand.is_empty() {
            continue;
        }
        if let Some(register) = parse_register(operand) {
            match position {
                0 => {
                    src = register;
                    dst = register;
                }
                1 => src = register,
                _ => {}
            }
        } else {
            imm = parse_immediate(operand);
        }
    }

    (src, dst, imm)
}

/// Parses a register operand (`r` followed by a decimal index). Returns
/// `None` if the token doesn't begin with `r` at all (so it can fall
/// through to immediate parsing); a malformed suffix (`rfoo`) is the
/// lenient zero case, matching the source's `atoi`-on-garbage behaviour.
fn parse_register(token: &str) -> Option<u8> {
    if !token.starts_with('r') {
        return None;
    }
    Some(token[1..].parse().unwrap_or(0))
}

/// Parses a signed decimal immediate. A token that fails to parse is
/// treated as zero, the one quiet-degradation case the assembler allows.
fn parse_immediate(token: &str) -> i8 {
    token.parse().unwrap_or(0)
}
