use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("unknown register `{0}`")]
    UnknownRegister(String),
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),
    #[error("`{0}` is not a valid variable value")]
    InvalidVariableValue(String),
    #[error("`{opcode}` needs {operands} operand(s)")]
    MalformedInstruction { opcode: String, operands: usize },
    #[error("immediate `{0}` does not fit in 32 bits")]
    InvalidImmediate(String),
    #[error("empty instruction")]
    EmptyInstruction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Data,
    Code,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Data => write!(f, "data"),
            Section::Code => write!(f, "code"),
        }
    }
}

/// A fault tied to a line of the data or code section.
///
/// `line_index` counts from zero within the section's stored lines, marker
/// lines included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{section} line {}: {kind}", .line_index + 1)]
pub struct EmulatorError {
    pub section: Section,
    pub line_index: usize,
    pub kind: ErrorKind,
}

impl EmulatorError {
    pub(crate) fn code(line_index: usize, kind: ErrorKind) -> EmulatorError {
        EmulatorError {
            section: Section::Code,
            line_index,
            kind,
        }
    }

    pub(crate) fn data(line_index: usize, kind: ErrorKind) -> EmulatorError {
        EmulatorError {
            section: Section::Data,
            line_index,
            kind,
        }
    }
}
