use crate::{
    dump::{format_dump, DEFAULT_DUMP, EXIT_EIP},
    error::EmulatorError,
    instruction::{Instruction, Register},
    memory::RegisterFile,
    parser::{decode, parse},
    program::{ParsedProgram, Program},
    variables::{load_variables, VariableTable},
};

/// Emulator state for a single submission.
#[derive(Debug, Clone, Default)]
pub struct Emulator {
    pub registers: RegisterFile,
    pub variables: VariableTable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Execution {
    Completed(RegisterFile),
    /// Required markers were missing, so nothing ran.
    Skipped,
}

impl Execution {
    pub fn dump(self: &Execution) -> String {
        match self {
            Execution::Completed(registers) => format_dump(registers, EXIT_EIP),
            Execution::Skipped => DEFAULT_DUMP.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub register_dump: String,
    pub missing_elements: Vec<String>,
    pub execution: Execution,
}

impl RunOutcome {
    pub fn missing_elements_message(self: &RunOutcome) -> Option<String> {
        if self.missing_elements.is_empty() {
            None
        } else {
            Some(format!(
                "Missing element(s): {}",
                self.missing_elements.join(", ")
            ))
        }
    }
}

impl Emulator {
    pub fn new(variables: VariableTable) -> Emulator {
        Emulator {
            registers: RegisterFile::new(),
            variables,
        }
    }

    /// Runs the code section unless a required marker is missing, consuming
    /// the emulator.
    pub fn execute(mut self: Emulator, parsed: &ParsedProgram) -> Result<Execution, EmulatorError> {
        if !parsed.is_complete() {
            warn!(
                "not executing, missing: {}",
                parsed.missing_elements().join(", ")
            );
            return Ok(Execution::Skipped);
        }

        let program = decode(&parsed.code_lines, &self.variables)?;
        self.run(&program);

        Ok(Execution::Completed(self.registers))
    }

    pub fn run(self: &mut Emulator, program: &Program) {
        for instruction in &program.instructions {
            if *instruction == Instruction::Exit {
                break;
            }
            self.step(instruction);
        }
    }

    pub fn step(self: &mut Emulator, instruction: &Instruction) {
        let registers = &mut self.registers;

        match *instruction {
            Instruction::Mov(target, value) => registers.set(target, value),
            Instruction::Add(target, source) => {
                let value = registers.get(target).wrapping_add(registers.get(source));
                registers.set(target, value);
            }
            Instruction::Sub(target, source) => {
                let value = registers.get(target).wrapping_sub(registers.get(source));
                registers.set(target, value);
            }
            Instruction::Mul(source) => {
                let accumulator = Register::ACCUMULATOR;
                let value = registers.get(accumulator).wrapping_mul(registers.get(source));
                registers.set(accumulator, value);
            }
            Instruction::Nop | Instruction::Exit => {}
        };

        debug!("{:?} -> {}", instruction, registers);
    }
}

/// Parses, loads and executes one program, building fresh state for it.
///
/// Variables are loaded before the marker check, so a bad declaration is
/// reported even for an incomplete program.
pub fn run(program_text: &str) -> Result<RunOutcome, EmulatorError> {
    let parsed = parse(program_text);
    info!(
        "parsed {} code line(s) and {} data line(s)",
        parsed.code_lines.len(),
        parsed.data_lines.len()
    );

    let variables = load_variables(&parsed.data_lines)?;
    let execution = Emulator::new(variables).execute(&parsed)?;

    if let Execution::Completed(registers) = &execution {
        info!("finished with {}", registers);
    }

    Ok(RunOutcome {
        register_dump: execution.dump(),
        missing_elements: parsed.missing_elements(),
        execution,
    })
}
