use crate::instruction::Register;
use std::collections::HashMap;

lazy_static! {
    static ref REGISTER_MAP: HashMap<&'static str, Register> = vec!(
        ("al", Register::Al),
        ("bl", Register::Bl),
        ("cl", Register::Cl),
        ("dl", Register::Dl),
        ("el", Register::El),
        ("fl", Register::Fl),
        ("gl", Register::Gl),
        ("hl", Register::Hl),
    )
    .into_iter()
    .collect();
}

/// Register names are case-sensitive.
pub(super) fn parse_register(name: &str) -> Option<Register> {
    REGISTER_MAP.get(name).copied()
}
