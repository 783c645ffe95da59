pub mod chip8;
/// Errors surfaced by the machine and by program loading.
mod error;
/// The host side: clock, input events and output to a frontend.
pub mod event_loop;

use std::path::Path;

pub use error::{Chip8Error, LoadProgramError};

/// The interface between an emulated chip and whatever hosts it. A host loads a
/// program, drives `cycle` at its instruction rate and `tick_timers` at the chip's
/// timer rate, feeds input pins and reads back output pins.
pub trait Chip {
    /// The type used to address a single input pin (a key).
    type PinAddress: Copy;

    /// The type used to report what a single cycle did.
    type Status;

    /// Loads the program stored at `path` and returns its size in bytes.
    fn load_program(&mut self, path: &Path) -> Result<usize, LoadProgramError>;

    /// Loads a program given as raw bytes and returns its size in bytes.
    fn load_program_bytes(&mut self, program: &[u8]) -> Result<usize, Chip8Error>;

    /// Executes exactly one instruction (or one poll while suspended).
    fn cycle(&mut self) -> Result<Self::Status, Chip8Error>;

    /// Advances the timers by one tick of the timer clock.
    fn tick_timers(&mut self);

    /// Restores power-on state and reloads the current program.
    fn reset(&mut self);

    fn read_output_pins(&self) -> &[bool];

    /// Returns whether the output pins changed since the last call and clears the flag.
    fn take_redraw(&mut self) -> bool;

    fn sound_active(&self) -> bool;

    fn set_input_pin(&mut self, pin: Self::PinAddress, value: bool);

    fn reset_input_pins(&mut self);
}
