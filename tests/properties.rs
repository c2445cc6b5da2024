use ls8::computer::instructions;
use ls8::computer::registers::Registers;
use ls8::computer::{Computer, Step};

use std::io;

use proptest::prelude::*;

const LDI: u8 = 0b1000_0010;
const MUL: u8 = 0b1010_0010;
const HLT: u8 = 0b0000_0001;

fn computer_with(program: &[u8]) -> Computer {
    let mut computer = Computer::new();
    computer.load_program(program).unwrap();
    computer
}

proptest! {
    #[test]
    fn ldi_loads_any_byte_into_any_register(register in 0u8..8, value in any::<u8>()) {
        let mut computer = computer_with(&[LDI, register, value]);
        computer.step(&mut io::sink()).unwrap();

        prop_assert_eq!(computer.registers().read(register).unwrap(), value);
        prop_assert_eq!(computer.program_counter(), 3);
    }

    #[test]
    fn mul_wraps_product_and_keeps_second_operand(
        a in 0u8..8,
        b in 0u8..8,
        x in any::<u8>(),
        y in any::<u8>(),
    ) {
        prop_assume!(a != b);
        let mut computer = computer_with(&[LDI, a, x, LDI, b, y, MUL, a, b]);
        let mut output: Vec<u8> = Vec::new();
        for _ in 0..3 {
            computer.step(&mut output).unwrap();
        }

        prop_assert_eq!(computer.registers().read(a).unwrap(), x.wrapping_mul(y));
        prop_assert_eq!(computer.registers().read(b).unwrap(), y);
        prop_assert_eq!(computer.program_counter(), 9);
    }

    #[test]
    fn unknown_opcode_only_moves_pc(opcode in any::<u8>()) {
        prop_assume!(instructions::decode(opcode).is_none());
        let mut computer = computer_with(&[opcode, HLT]);
        let step = computer.step(&mut io::sink()).unwrap();

        prop_assert_eq!(step, Step::Skipped { address: 0, opcode });
        prop_assert_eq!(computer.program_counter(), 1);
        prop_assert_eq!(*computer.registers(), Registers::new());
    }

    #[test]
    fn halt_stops_everything(tail in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut program = vec![HLT];
        program.extend(tail);
        let mut computer = computer_with(&program);
        let mut output: Vec<u8> = Vec::new();
        let summary = computer.run(&mut output).unwrap();

        prop_assert_eq!(summary.cycles, 1);
        prop_assert!(output.is_empty());
        prop_assert_eq!(computer.program_counter(), 0);
    }
}
