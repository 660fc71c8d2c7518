use crate::{
    error::{EmulatorError, ErrorKind},
    lexer::{parse_word, tokenize},
};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    values: HashMap<String, i32>,
}

impl VariableTable {
    /// Names are case-sensitive.
    pub fn get(self: &VariableTable, name: &str) -> Option<i32> {
        self.values.get(name).copied()
    }

    pub fn insert(self: &mut VariableTable, name: &str, value: i32) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn len(self: &VariableTable) -> usize {
        self.values.len()
    }

    pub fn is_empty(self: &VariableTable) -> bool {
        self.values.is_empty()
    }
}

/// Collects `<name> db <value>` declarations. Every other line, marker lines
/// included, is skipped.
pub fn load_variables(data_lines: &[&str]) -> Result<VariableTable, EmulatorError> {
    let mut variables = VariableTable::default();

    for (line_index, line) in data_lines.iter().enumerate() {
        let tokens = tokenize(line);
        if tokens.len() != 3 || !tokens[1].eq_ignore_ascii_case("db") {
            continue;
        }

        let value = parse_word(tokens[2]).ok_or_else(|| {
            EmulatorError::data(line_index, ErrorKind::InvalidVariableValue(tokens[2].to_owned()))
        })?;

        debug!("variable {} = {}", tokens[0], value);
        variables.insert(tokens[0], value);
    }

    Ok(variables)
}
