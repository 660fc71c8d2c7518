use super::unresolved_instruction::{UnresolvedInstruction, UnresolvedSource};
use crate::{error::ErrorKind, instruction::Instruction, variables::VariableTable};

pub(super) fn resolve(
    instruction: &UnresolvedInstruction<'_>,
    variables: &VariableTable,
) -> Result<Instruction, ErrorKind> {
    let result = match instruction {
        UnresolvedInstruction::Mov(target, source) => {
            let value = match source {
                UnresolvedSource::Value(value) => *value,
                UnresolvedSource::Variable(name) => variables
                    .get(name)
                    .ok_or_else(|| ErrorKind::UnknownVariable((*name).to_owned()))?,
            };
            Instruction::Mov(*target, value)
        }
        UnresolvedInstruction::Add(target, source) => Instruction::Add(*target, *source),
        UnresolvedInstruction::Sub(target, source) => Instruction::Sub(*target, *source),
        UnresolvedInstruction::Mul(source) => Instruction::Mul(*source),
        UnresolvedInstruction::Nop => Instruction::Nop,
        UnresolvedInstruction::Exit => Instruction::Exit,
    };

    Ok(result)
}
