use crate::computer::errors::ComputerError;
use crate::computer::instructions::Operation;
use crate::computer::registers::Registers;

/// Computes `reg_a <op> reg_b` and stores the result in `reg_a`.
///
/// Results wrap modulo 256.
pub fn apply(
    registers: &mut Registers,
    operation: Operation,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), ComputerError> {
    let a = registers.read(reg_a)?;
    let b = registers.read(reg_b)?;

    let result = match operation {
        Operation::Add => a.wrapping_add(b),
        Operation::Multiply => a.wrapping_mul(b),
        Operation::Halt | Operation::LoadImmediate | Operation::Print => {
            return Err(ComputerError::UnsupportedOperation(operation))
        }
    };

    registers.write(reg_a, result)
}
