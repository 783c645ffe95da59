//! An implementation of the CHIP-8 virtual machine. The implementation follows the instruction
//! set described [here](https://en.wikipedia.org/wiki/CHIP-8#Opcode_table). The machine itself
//! is free of any I/O: a host drives it through the [`chip::Chip`] trait, either directly or
//! through the [`chip::event_loop`] which keeps instruction execution and the 60Hz timers on
//! separate cadences. The bundled binary renders the display with the cursive text user
//! interface library.
pub mod chip;

pub use chip::{
    chip8::{Chip8, CycleStatus, ExecutionState, Quirks},
    Chip, Chip8Error, LoadProgramError,
};
