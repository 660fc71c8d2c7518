use crate::memory::RegisterFile;
use std::iter;

/// Instruction pointer shown before anything has run.
pub const ENTRY_EIP: u32 = 0x0040_1000;
/// Instruction pointer shown once a program has run.
pub const EXIT_EIP: u32 = 0x0040_1019;

pub const SEGMENT_REGISTERS: [(&str, u16); 6] = [
    ("ds", 0x002B),
    ("es", 0x002B),
    ("fs", 0x0053),
    ("gs", 0x002B),
    ("ss", 0x002B),
    ("cs", 0x0023),
];

/// Dump of a machine that has not run anything.
pub const DEFAULT_DUMP: &str = "eax 00000000\n\
                                ebx 00000000\n\
                                ecx 00000000\n\
                                edx 00000000\n\
                                esi 00000000\n\
                                edi 00000000\n\
                                ebp 00000000\n\
                                esp 00000000\n\
                                ds  002B\n\
                                es  002B\n\
                                fs  0053\n\
                                gs  002B\n\
                                ss  002B\n\
                                cs  0023\n\
                                eip 00401000\n";

/// Renders the 15-line register dump. Values are shown as unsigned 32-bit hex,
/// so negative values appear in two's complement.
pub fn format_dump(registers: &RegisterFile, eip: u32) -> String {
    let general = registers
        .iter()
        .map(|(register, value)| format!("{:<3} {:08X}\n", register.display_name(), value as u32));
    let segments = SEGMENT_REGISTERS
        .iter()
        .map(|(name, selector)| format!("{:<3} {:04X}\n", name, selector));

    general
        .chain(segments)
        .chain(iter::once(format!("{:<3} {:08X}\n", "eip", eip)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Register;

    #[test]
    fn untouched_registers_format_as_the_default_dump() {
        assert_eq!(format_dump(&RegisterFile::new(), ENTRY_EIP), DEFAULT_DUMP);
    }

    #[test]
    fn dump_has_fifteen_lines() {
        assert_eq!(DEFAULT_DUMP.lines().count(), 15);
        assert_eq!(format_dump(&RegisterFile::new(), EXIT_EIP).lines().count(), 15);
    }

    #[test]
    fn registers_map_to_display_names_by_slot() {
        let mut registers = RegisterFile::new();
        registers.set(Register::Gl, 0x1234);
        registers.set(Register::Hl, 0xABCDEF);

        let dump = format_dump(&registers, EXIT_EIP);
        let lines: Vec<_> = dump.lines().collect();

        assert_eq!(lines[6], "ebp 00001234");
        assert_eq!(lines[7], "esp 00ABCDEF");
        assert_eq!(lines[14], "eip 00401019");
    }

    #[test]
    fn negative_values_wrap() {
        let mut registers = RegisterFile::new();
        registers.set(Register::Al, -3);
        registers.set(Register::Bl, i32::MIN);

        let dump = format_dump(&registers, EXIT_EIP);

        assert!(dump.starts_with("eax FFFFFFFD\nebx 80000000\n"));
    }
}
