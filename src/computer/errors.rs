use std::io;

use thiserror::Error;

use crate::computer::instructions::Operation;

/// Fatal conditions that stop the run loop.
#[derive(Error, Debug)]
pub enum ComputerError {
    #[error("register index {0} out of bounds")]
    RegisterOutOfBounds(u8),

    #[error("memory address {address:#06x} out of bounds (size {size})")]
    MemoryOutOfBounds { address: usize, size: usize },

    #[error("memory size {0} is below the minimum of 256 cells")]
    MemoryTooSmall(usize),

    #[error("program of {len} bytes does not fit in {capacity} bytes of memory")]
    ProgramTooLarge { len: usize, capacity: usize },

    /// The dispatcher routed an operation the ALU has no arithmetic for.
    #[error("unsupported ALU operation {}", .0.mnemonic())]
    UnsupportedOperation(Operation),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
