mod register;
mod resolver;
mod sections;
mod unresolved_instruction;

pub use sections::parse;

use crate::{
    error::EmulatorError,
    instruction::Instruction,
    lexer::tokenize,
    program::Program,
    variables::VariableTable,
};
use resolver::resolve;
use unresolved_instruction::UnresolvedInstruction;

/// Decodes code lines up to and including the first `call exitprocess`.
/// Nothing after the exit is looked at. A blank line before it is an error.
pub fn decode(code_lines: &[&str], variables: &VariableTable) -> Result<Program, EmulatorError> {
    let mut instructions: Vec<Instruction> = vec![];

    for (line_index, line) in code_lines.iter().enumerate() {
        let tokens = tokenize(line);
        let instruction = UnresolvedInstruction::parse(&tokens)
            .and_then(|unresolved| resolve(&unresolved, variables))
            .map_err(|kind| EmulatorError::code(line_index, kind))?;

        debug!("decoded {:?} from `{}`", instruction, line);
        instructions.push(instruction);

        if instruction == Instruction::Exit {
            break;
        }
    }

    Ok(Program { instructions })
}
