use crate::chip::{
    chip8::constants::{
        CHIP8_CHARSET, CHIP8_CHARSET_OFFSET, CHIP8_MAX_PROGRAM_SIZE, CHIP8_MEMORY_SIZE,
        CHIP8_PROGRAM_OFFSET,
    },
    Chip8Error,
};

/// The 4096 bytes of main memory. Every access that is derived from program data is
/// bounds checked and reported as `MemoryOutOfBounds` instead of wrapping.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; CHIP8_MEMORY_SIZE],
}

impl Memory {
    /// Creates a memory with the charset loaded at `CHIP8_CHARSET_OFFSET` and
    /// everything else zeroed.
    pub fn new() -> Self {
        let mut bytes = [0; CHIP8_MEMORY_SIZE];
        let offset = CHIP8_CHARSET_OFFSET as usize;
        bytes[offset..offset + CHIP8_CHARSET.len()].copy_from_slice(&CHIP8_CHARSET);
        Memory { bytes }
    }

    /// Copies `program` to `CHIP8_PROGRAM_OFFSET`. Nothing is written if the program
    /// does not fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Chip8Error> {
        if program.len() > CHIP8_MAX_PROGRAM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: program.len(),
                max_size: CHIP8_MAX_PROGRAM_SIZE,
            });
        }
        let offset = CHIP8_PROGRAM_OFFSET as usize;
        self.bytes[offset..offset + program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Reads the big endian instruction word at `address`.
    pub fn read_word(&self, address: u16) -> Result<u16, Chip8Error> {
        let address = address as usize;
        if address + 1 >= CHIP8_MEMORY_SIZE {
            return Err(Chip8Error::FetchOutOfBounds {
                address: address as u16,
            });
        }
        Ok(u16::from(self.bytes[address]) << 8 | u16::from(self.bytes[address + 1]))
    }

    #[cfg(test)]
    pub fn read_byte(&self, address: usize) -> Result<u8, Chip8Error> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(Chip8Error::MemoryOutOfBounds { address })
    }

    /// Returns `len` bytes starting at `address`.
    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8], Chip8Error> {
        Self::check_range(address, len)?;
        Ok(&self.bytes[address..address + len])
    }

    /// Returns `len` bytes starting at `address` for writing.
    pub fn slice_mut(&mut self, address: usize, len: usize) -> Result<&mut [u8], Chip8Error> {
        Self::check_range(address, len)?;
        Ok(&mut self.bytes[address..address + len])
    }

    fn check_range(address: usize, len: usize) -> Result<(), Chip8Error> {
        if address + len > CHIP8_MEMORY_SIZE {
            // report the first byte that lies outside
            return Err(Chip8Error::MemoryOutOfBounds {
                address: address.max(CHIP8_MEMORY_SIZE),
            });
        }
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Memory::new()
    }
}
