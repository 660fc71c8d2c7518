#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Register {
    Al = 0,
    Bl = 1,
    Cl = 2,
    Dl = 3,
    El = 4,
    Fl = 5,
    Gl = 6,
    Hl = 7,
}

pub const NUM_REGISTERS: usize = 8;

impl Register {
    /// The register `mul` multiplies into.
    pub const ACCUMULATOR: Register = Register::Al;

    pub fn name(self) -> &'static str {
        match self {
            Register::Al => "al",
            Register::Bl => "bl",
            Register::Cl => "cl",
            Register::Dl => "dl",
            Register::El => "el",
            Register::Fl => "fl",
            Register::Gl => "gl",
            Register::Hl => "hl",
        }
    }

    /// Name shown in the register dump.
    pub fn display_name(self) -> &'static str {
        match self {
            Register::Al => "eax",
            Register::Bl => "ebx",
            Register::Cl => "ecx",
            Register::Dl => "edx",
            Register::El => "esi",
            Register::Fl => "edi",
            Register::Gl => "ebp",
            Register::Hl => "esp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    Mov(Register, i32),
    Add(Register, Register),
    Sub(Register, Register),
    Mul(Register),
    /// Any opcode the emulator does not know about.
    Nop,
    /// `call exitprocess`
    Exit,
}
