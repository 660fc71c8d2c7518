use crate::instruction::Instruction;
use std::fmt;

/// One of the structural lines every program has to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Data,
    Code,
    Start,
    End,
}

impl Marker {
    /// Canonical order, which is also the order missing markers are reported in.
    pub const ALL: [Marker; 4] = [Marker::Data, Marker::Code, Marker::Start, Marker::End];

    pub fn text(self) -> &'static str {
        match self {
            Marker::Data => ".data",
            Marker::Code => ".code",
            Marker::Start => "_start:",
            Marker::End => "end _start",
        }
    }

    /// Matches a trimmed source line, ignoring case.
    pub fn parse(line: &str) -> Option<Marker> {
        let line = line.to_lowercase();
        Marker::ALL.iter().copied().find(|m| m.text() == line)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedProgram<'a> {
    pub code_lines: Vec<&'a str>,
    pub data_lines: Vec<&'a str>,
    pub missing: Vec<Marker>,
}

impl ParsedProgram<'_> {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_elements(&self) -> Vec<String> {
        self.missing.iter().map(|m| m.text().to_owned()).collect()
    }
}

/// Decoded code section, ending at the first `call exitprocess` if there is one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}
