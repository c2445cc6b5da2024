use phf::phf_map;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Halt,
    LoadImmediate,
    Multiply,
    Print,
}

impl Operation {
    /// Number of operand bytes following the opcode.
    pub fn operand_count(self) -> usize {
        match self {
            Operation::Add | Operation::LoadImmediate | Operation::Multiply => 2,
            Operation::Print => 1,
            Operation::Halt => 0,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Operation::Add => "ADD",
            Operation::Halt => "HLT",
            Operation::LoadImmediate => "LDI",
            Operation::Multiply => "MUL",
            Operation::Print => "PRN",
        }
    }
}

// ADD is handled by the ALU but has no opcode byte.
pub static OPCODES: phf::Map<u8, Operation> = phf_map! {
    0b1000_0010u8 => Operation::LoadImmediate,
    0b0100_0111u8 => Operation::Print,
    0b0000_0001u8 => Operation::Halt,
    0b1010_0010u8 => Operation::Multiply,
};

pub fn decode(opcode: u8) -> Option<Operation> {
    OPCODES.get(&opcode).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_four_opcodes() {
        assert_eq!(decode(0x82), Some(Operation::LoadImmediate));
        assert_eq!(decode(0x47), Some(Operation::Print));
        assert_eq!(decode(0x01), Some(Operation::Halt));
        assert_eq!(decode(0xA2), Some(Operation::Multiply));
    }

    #[test]
    fn add_is_not_reachable_from_any_byte() {
        assert!((0..=u8::MAX).all(|byte| decode(byte) != Some(Operation::Add)));
        assert_eq!(OPCODES.len(), 4);
    }

    #[test]
    fn unknown_bytes_decode_to_none() {
        assert_eq!(decode(0x00), None);
        assert_eq!(decode(0xFF), None);
    }
}
