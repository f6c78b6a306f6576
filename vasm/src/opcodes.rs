use vcpu::Opcode;

/// Maps an opcode mnemonic to its numeric tag. Exact, case-sensitive match
/// against the fourteen executable/reserved names; `Invalid` is not
/// nameable, since it exists only as the codec's internal "not yet
/// resolved" sentinel.
pub fn lookup(name: &str) -> Option<Opcode> {
    match name {
        "Halt" => Some(Opcode::Halt),
        "LoadImmediate" => Some(Opcode::LoadImmediate),
        "Add" => Some(Opcode::Add),
        "AddImmediate" => Some(Opcode::AddImmediate),
        "And" => Some(Opcode::And),
        "Or" => Some(Opcode::Or),
        "Xor" => Some(Opcode::Xor),
        "Jump" => Some(Opcode::Jump),
        "BranchOnEqual" => Some(Opcode::BranchOnEqual),
        "Move" => Some(Opcode::Move),
        "LoadDirect" => Some(Opcode::LoadDirect),
        "StoreDirect" => Some(Opcode::StoreDirect),
        "LoadIndirect" => Some(Opcode::LoadIndirect),
        "StoreIndirect" => Some(Opcode::StoreIndirect),
        _ => None,
    }
}
