use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading or executing a CHIP-8 program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Chip8Error {
    /// No entry of the instruction table matched the fetched word.
    #[error("illegal opcode {opcode:#06X} at {address:#05X}")]
    IllegalOpcode { opcode: u16, address: u16 },

    /// A `0NNN` machine code routine call. The program counter has already been
    /// moved past the instruction, so the host may simply keep cycling.
    #[error("unsupported machine code call {opcode:#06X} at {address:#05X}")]
    UnsupportedInstruction { opcode: u16, address: u16 },

    #[error("stack overflow: call at {address:#05X} exceeds {capacity} nested calls")]
    StackOverflow { address: u16, capacity: usize },

    #[error("stack underflow: return at {address:#05X} with an empty call stack")]
    StackUnderflow { address: u16 },

    /// An instruction tried to touch memory past the end of the address space.
    #[error("memory access out of bounds at {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    #[error("cannot fetch an instruction at {address:#05X}")]
    FetchOutOfBounds { address: u16 },

    #[error("program is too large ({size} bytes), at most {max_size} bytes fit")]
    RomTooLarge { size: usize, max_size: usize },
}

impl Chip8Error {
    /// Whether the machine should halt on this error. Only unsupported machine code
    /// calls are safe to skip.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Chip8Error::UnsupportedInstruction { .. })
    }
}

/// Errors while loading a program from storage.
#[derive(Debug, Error)]
pub enum LoadProgramError {
    #[error("could not read program {}: {source}", .path.display())]
    CouldNotReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Rejected(#[from] Chip8Error),
}
