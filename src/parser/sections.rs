use crate::{
    lexer::LexerContext,
    program::{Marker, ParsedProgram},
};

/// Splits program text into its data and code lines.
///
/// Marker lines are stored like any other line: `_start:` opens the code
/// section before it is stored, `end _start` closes it before it is stored.
/// Lines before the first `.data` or `.code` are dropped.
pub fn parse(source: &str) -> ParsedProgram<'_> {
    let lexer = LexerContext::lex(source);

    let mut seen = [false; 4];
    let mut in_code_section = false;
    let mut program = ParsedProgram::default();

    for &line in lexer.lines() {
        if let Some(marker) = Marker::parse(line) {
            seen[marker as usize] = true;
            match marker {
                Marker::Start => in_code_section = true,
                Marker::End => in_code_section = false,
                Marker::Data | Marker::Code => {}
            }
        }

        if in_code_section {
            trace!("code: {}", line);
            program.code_lines.push(line);
        } else if seen[Marker::Data as usize] || seen[Marker::Code as usize] {
            trace!("data: {}", line);
            program.data_lines.push(line);
        }
    }

    program.missing = Marker::ALL
        .iter()
        .copied()
        .filter(|m| !seen[*m as usize])
        .collect();

    program
}
