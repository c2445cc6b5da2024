use crate::computer::errors::ComputerError;

/// Smallest memory that still covers every address a byte can name.
pub const MEMORY_SIZE: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    ram: Vec<u8>,
}

#[allow(clippy::len_without_is_empty)]
impl Memory {
    pub fn new() -> Memory {
        Memory {
            ram: vec![0; MEMORY_SIZE],
        }
    }

    pub fn with_size(size: usize) -> Result<Memory, ComputerError> {
        if size < MEMORY_SIZE {
            return Err(ComputerError::MemoryTooSmall(size));
        }

        Ok(Memory { ram: vec![0; size] })
    }

    pub fn len(&self) -> usize {
        self.ram.len()
    }

    pub fn read(&self, address: usize) -> Result<u8, ComputerError> {
        self.ram
            .get(address)
            .copied()
            .ok_or(ComputerError::MemoryOutOfBounds {
                address,
                size: self.ram.len(),
            })
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<(), ComputerError> {
        let size = self.ram.len();
        match self.ram.get_mut(address) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(ComputerError::MemoryOutOfBounds { address, size }),
        }
    }

    /// Read without failing, for diagnostics.
    pub fn peek(&self, address: usize) -> Option<u8> {
        self.ram.get(address).copied()
    }

    /// Places `program` at ascending addresses starting from zero.
    pub fn load(&mut self, program: &[u8]) -> Result<(), ComputerError> {
        if program.len() > self.ram.len() {
            return Err(ComputerError::ProgramTooLarge {
                len: program.len(),
                capacity: self.ram.len(),
            });
        }

        self.ram[..program.len()].copy_from_slice(program);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
