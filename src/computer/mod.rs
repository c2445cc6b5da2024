pub mod alu;
pub mod errors;
pub mod instructions;
pub mod memory;
pub mod registers;

use std::io::Write;

use log::{debug, log_enabled, trace, warn, Level};
use smallvec::SmallVec;

use crate::computer::errors::ComputerError;
use crate::computer::instructions::Operation;
use crate::computer::memory::Memory;
use crate::computer::registers::Registers;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// What a single fetch-decode-execute cycle did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Executed(Operation),
    /// The byte at `address` is not an opcode and was stepped over.
    Skipped { address: usize, opcode: u8 },
    Halted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    /// `(address, byte)` of every unknown opcode skipped, in order.
    pub skipped: Vec<(usize, u8)>,
}

#[derive(Clone, Debug)]
pub struct Computer {
    registers: Registers,
    program_counter: usize,
    ram: Memory,
    state: State,
}

impl Computer {
    pub fn new() -> Computer {
        Computer {
            registers: Registers::new(),
            program_counter: 0,
            ram: Memory::new(),
            state: State::Running,
        }
    }

    pub fn with_memory_size(size: usize) -> Result<Computer, ComputerError> {
        Ok(Computer {
            ram: Memory::with_size(size)?,
            ..Computer::new()
        })
    }

    pub fn load_program(&mut self, machine_code: &[u8]) -> Result<(), ComputerError> {
        self.ram.load(machine_code)?;
        debug!("loaded {} bytes", machine_code.len());
        Ok(())
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.ram
    }

    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn ram_read(&self, address: usize) -> Result<u8, ComputerError> {
        self.ram.read(address)
    }

    pub fn ram_write(&mut self, address: usize, value: u8) -> Result<(), ComputerError> {
        self.ram.write(address, value)
    }

    /// Runs cycles until HLT or a fatal error. `PRN` output goes to `output`.
    pub fn run<W: Write>(&mut self, output: &mut W) -> Result<RunSummary, ComputerError> {
        let mut summary = RunSummary::default();

        while !self.is_halted() {
            let step = self.step(output)?;
            summary.cycles += 1;

            if let Step::Skipped { address, opcode } = step {
                summary.skipped.push((address, opcode));
            }
        }

        Ok(summary)
    }

    /// Executes one fetch-decode-execute cycle.
    ///
    /// On error the program counter is left at the failing instruction.
    /// Once halted, this is a no-op returning [`Step::Halted`].
    pub fn step<W: Write>(&mut self, output: &mut W) -> Result<Step, ComputerError> {
        if self.is_halted() {
            return Ok(Step::Halted);
        }

        if log_enabled!(Level::Trace) {
            trace!("{}", self.trace());
        }

        let address = self.program_counter;
        let opcode = self.ram.read(address)?;

        let Some(operation) = instructions::decode(opcode) else {
            warn!("unknown opcode {opcode} ({opcode:#04x}) at address {address:#04x}");
            self.program_counter += 1;
            return Ok(Step::Skipped { address, opcode });
        };

        let operands = self.fetch_operands(operation)?;

        match operation {
            Operation::LoadImmediate => self.registers.write(operands[0], operands[1])?,
            Operation::Print => {
                let value = self.registers.read(operands[0])?;
                writeln!(output, "{value}")?;
            }
            Operation::Add | Operation::Multiply => {
                alu::apply(&mut self.registers, operation, operands[0], operands[1])?
            }
            Operation::Halt => {
                debug!("halted at address {address:#04x}");
                self.state = State::Halted;
                return Ok(Step::Halted);
            }
        }

        self.program_counter += 1 + operation.operand_count();
        Ok(Step::Executed(operation))
    }

    fn fetch_operands(&self, operation: Operation) -> Result<SmallVec<[u8; 2]>, ComputerError> {
        (1..=operation.operand_count())
            .map(|offset| self.ram.read(self.program_counter + offset))
            .collect()
    }

    /// One-line dump of PC, the next three memory bytes and all registers.
    pub fn trace(&self) -> String {
        let window = (0..3)
            .map(|offset| match self.ram.peek(self.program_counter + offset) {
                Some(byte) => format!("{byte:02X}"),
                None => String::from("--"),
            })
            .collect::<Vec<String>>();

        let registers = self
            .registers
            .as_slice()
            .iter()
            .map(|value| format!("{value:02X}"))
            .collect::<Vec<String>>();

        format!(
            "TRACE: {:02X} | {} | {}",
            self.program_counter,
            window.join(" "),
            registers.join(" ")
        )
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::new()
    }
}
