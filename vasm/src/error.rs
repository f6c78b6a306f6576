use std::fmt;

/// The one fatal condition the assembler can report: an opcode name the
/// mnemonic table doesn't recognise.
///
/// `instruction_index` is the zero-based index of the instruction being
/// assembled (comments and blank lines don't count), not the source line
/// number, matching the original's `current_instruction` counter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssembleError {
    UnrecognizedOpcode {
        instruction_index: usize,
        name: String,
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssembleError::UnrecognizedOpcode {
                instruction_index,
                name,
            } => write!(
                f,
                "unrecognized opcode \"{}\" at instruction {}",
                name, instruction_index
            ),
        }
    }
}

impl std::error::Error for AssembleError {}
