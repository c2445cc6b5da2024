use crate::computer::errors::ComputerError;

pub const REGISTER_COUNT: usize = 8;

// Reserved by convention; nothing in the run loop treats them specially.
pub const INTERRUPT_MASK: u8 = 5;
pub const INTERRUPT_STATUS: u8 = 6;
pub const STACK_POINTER: u8 = 7;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    slots: [u8; REGISTER_COUNT],
}

impl Registers {
    pub fn new() -> Registers {
        Registers {
            slots: [0; REGISTER_COUNT],
        }
    }

    pub fn read(&self, index: u8) -> Result<u8, ComputerError> {
        self.slots
            .get(index as usize)
            .copied()
            .ok_or(ComputerError::RegisterOutOfBounds(index))
    }

    pub fn write(&mut self, index: u8, value: u8) -> Result<(), ComputerError> {
        let slot = self
            .slots
            .get_mut(index as usize)
            .ok_or(ComputerError::RegisterOutOfBounds(index))?;
        *slot = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.slots
    }
}
