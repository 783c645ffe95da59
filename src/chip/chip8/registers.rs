use ux::u12;

use crate::chip::chip8::constants::{
    CHIP8_FLAG_REGISTER, CHIP8_PROGRAM_OFFSET, CHIP8_REGISTER_COUNT,
};

/// Adds `offset` to a 12 bit address, wrapping around at 4096.
pub fn wrapping_offset(address: u12, offset: u16) -> u12 {
    u12::new(u16::from(address).wrapping_add(offset) & 0x0FFF)
}

/// The general purpose registers V0 - VF, the index register I and the program counter.
/// I and the program counter are 12 bit wide and wrap around on overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    v: [u8; CHIP8_REGISTER_COUNT],
    index: u12,
    program_counter: u12,
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            v: [0; CHIP8_REGISTER_COUNT],
            index: u12::new(0),
            program_counter: u12::new(CHIP8_PROGRAM_OFFSET),
        }
    }

    /// Reads register `Vreg`. Only the low nibble of `reg` is used.
    pub fn get(&self, reg: u8) -> u8 {
        self.v[(reg & 0xF) as usize]
    }

    pub fn set(&mut self, reg: u8, value: u8) {
        self.v[(reg & 0xF) as usize] = value;
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.v[CHIP8_FLAG_REGISTER] = flag as u8;
    }

    /// Registers V0 up to and including `Vlast`.
    pub fn range(&self, last: u8) -> &[u8] {
        &self.v[..=(last & 0xF) as usize]
    }

    pub fn range_mut(&mut self, last: u8) -> &mut [u8] {
        &mut self.v[..=(last & 0xF) as usize]
    }

    pub fn index(&self) -> u12 {
        self.index
    }

    pub fn set_index(&mut self, index: u12) {
        self.index = index;
    }

    pub fn program_counter(&self) -> u12 {
        self.program_counter
    }

    pub fn set_program_counter(&mut self, program_counter: u12) {
        self.program_counter = program_counter;
    }

    /// Moves the program counter forward by `by` bytes.
    pub fn advance(&mut self, by: u16) {
        self.program_counter = wrapping_offset(self.program_counter, by);
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        RegisterFile::new()
    }
}
