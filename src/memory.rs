use crate::instruction::{Register, NUM_REGISTERS};
use num_traits::FromPrimitive;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegisterFile {
    registers: [i32; NUM_REGISTERS],
}

impl RegisterFile {
    pub fn new() -> RegisterFile {
        RegisterFile::default()
    }

    pub fn get(self: &RegisterFile, register: Register) -> i32 {
        self.registers[register as usize]
    }

    pub fn set(self: &mut RegisterFile, register: Register, value: i32) {
        self.registers[register as usize] = value;
    }

    /// Registers in slot order, paired with their current values.
    pub fn iter(self: &RegisterFile) -> impl Iterator<Item = (Register, i32)> + '_ {
        self.registers
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| Register::from_usize(slot).map(|reg| (reg, *value)))
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (register, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", register.name(), value)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_start_at_zero() {
        let registers = RegisterFile::new();
        assert!(registers.iter().all(|(_, value)| value == 0));
        assert_eq!(registers.iter().count(), NUM_REGISTERS);
    }

    #[test]
    fn set_only_touches_the_given_register() {
        let mut registers = RegisterFile::new();
        registers.set(Register::Cl, -7);

        assert_eq!(registers.get(Register::Cl), -7);
        assert_eq!(registers.get(Register::Al), 0);
        assert_eq!(registers.get(Register::Dl), 0);
    }

    #[test]
    fn iter_yields_registers_in_slot_order() {
        let order: Vec<_> = RegisterFile::new().iter().map(|(r, _)| r).collect();
        assert_eq!(
            order,
            [
                Register::Al,
                Register::Bl,
                Register::Cl,
                Register::Dl,
                Register::El,
                Register::Fl,
                Register::Gl,
                Register::Hl,
            ]
        );
    }

    #[test]
    fn display_lists_every_register_in_decimal() {
        let mut registers = RegisterFile::new();
        registers.set(Register::Al, 8);
        registers.set(Register::Hl, -1);

        assert_eq!(
            registers.to_string(),
            "al=8, bl=0, cl=0, dl=0, el=0, fl=0, gl=0, hl=-1"
        );
    }
}
