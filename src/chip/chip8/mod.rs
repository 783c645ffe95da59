/// CHIP-8 constants.
pub mod constants;
/// Cursive display output.
pub mod cursive_display;
/// The 64x32 display.
mod frame_buffer;
/// The 16 key hexadecimal keypad.
mod keypad;
/// Main memory, charset and program loading.
mod memory;
/// Decoding of opcodes and their execution.
pub mod opcodes;
mod quirks;
mod registers;
mod stack;
mod timers;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use log::{debug, trace, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chip::{
    chip8::{
        constants::CHIP8_MAX_PROGRAM_SIZE,
        opcodes::{Opcode, ProgramFlow},
    },
    Chip, Chip8Error, LoadProgramError,
};

use frame_buffer::FrameBuffer;
use memory::Memory;
use registers::RegisterFile;
use stack::CallStack;

pub use keypad::Keypad;
pub use quirks::Quirks;
pub use timers::TimerUnit;

/// Whether the machine executes instructions or is suspended by FX0A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    Running,
    /// Waiting for any key; the key will be stored in `register`.
    AwaitingKey { register: u8 },
}

/// The outcome of a successful cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    /// An instruction was executed, or a pending key wait was satisfied.
    Executed,
    /// The machine is suspended until a key is pressed.
    AwaitingKey,
}

/// Represents the state of the CHIP-8.
#[derive(Clone)]
pub struct Chip8 {
    /// 4096 bytes of main memory
    memory: Memory,

    /// V0 - VF, the index register and the program counter
    registers: RegisterFile,

    /// Return addresses of the active subroutine calls
    stack: CallStack,

    /// The delay and sound timers. They are only decremented by `tick_timers`.
    timers: TimerUnit,

    /// The output pins. Those are usually directly wired up to the pixels of the
    /// display, which is why they are kept as a frame buffer.
    frame_buffer: FrameBuffer,

    /// The input pins, usually wired up to the keys.
    keypad: Keypad,

    quirks: Quirks,

    /// Source of the random bytes of CXNN.
    rng: StdRng,

    execution: ExecutionState,

    /// The currently loaded program, kept so that `reset` can reload it.
    program: Vec<u8>,

    /// A flag that indicates whether the output pins changed since it
    /// was last taken.
    draw: bool,
}

impl Chip for Chip8 {
    /// The CHIP-8's pins can actually be addressed by using just half a byte.
    /// We use a whole byte here and ignore the high nibble.
    type PinAddress = u8;

    type Status = CycleStatus;

    fn load_program(&mut self, path: &Path) -> Result<usize, LoadProgramError> {
        let program = fs::read(path).map_err(|source| LoadProgramError::CouldNotReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.load_program_bytes(&program)?)
    }

    fn load_program_bytes(&mut self, program: &[u8]) -> Result<usize, Chip8Error> {
        if program.len() > CHIP8_MAX_PROGRAM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: program.len(),
                max_size: CHIP8_MAX_PROGRAM_SIZE,
            });
        }
        self.program = program.to_vec();
        self.reset();
        debug!("loaded program of {} bytes", program.len());
        Ok(program.len())
    }

    fn cycle(&mut self) -> Result<CycleStatus, Chip8Error> {
        if let ExecutionState::AwaitingKey { register } = self.execution {
            return Ok(self.poll_key(register));
        }

        let address = self.registers.program_counter();
        let opcode = self.next_instruction()?;
        let pattern = opcodes::lookup(opcode.word()).ok_or(Chip8Error::IllegalOpcode {
            opcode: opcode.word(),
            address: u16::from(address),
        })?;
        trace!(
            "{:03X}: {} {:<14} v{:02X?} i{:03X}",
            u16::from(address),
            opcode,
            pattern.mnemonic,
            self.registers.range(0xF),
            u16::from(self.registers.index())
        );

        match (pattern.handler)(&opcode, self) {
            Ok(ProgramFlow::Next) => self.registers.advance(2),
            Ok(ProgramFlow::Skip) => self.registers.advance(4),
            Ok(ProgramFlow::Jump(target)) => self.registers.set_program_counter(target),
            Ok(ProgramFlow::Wait) => {
                debug!("suspended at {:03X} until a key is pressed", u16::from(address));
                return Ok(CycleStatus::AwaitingKey);
            }
            Err(error) if !error.is_fatal() => {
                warn!("{}, skipping", error);
                self.registers.advance(2);
                return Err(error);
            }
            Err(error) => return Err(error),
        }
        Ok(CycleStatus::Executed)
    }

    fn tick_timers(&mut self) {
        self.timers.tick();
    }

    fn reset(&mut self) {
        let mut memory = Memory::new();
        // the program has been checked when it was loaded
        if let Err(error) = memory.load_program(&self.program) {
            warn!("could not reload program: {}", error);
        }
        self.memory = memory;
        self.registers = RegisterFile::new();
        self.stack = CallStack::new();
        self.timers = TimerUnit::new();
        self.frame_buffer.clear();
        self.keypad.release_all();
        self.execution = ExecutionState::Running;
        self.draw = true;
        debug!("machine reset");
    }

    fn read_output_pins(&self) -> &[bool] {
        self.frame_buffer.as_slice()
    }

    fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.draw, false)
    }

    fn sound_active(&self) -> bool {
        self.timers.sound_active()
    }

    fn set_input_pin(&mut self, pin: u8, value: bool) {
        self.keypad.set(pin, value);
    }

    fn reset_input_pins(&mut self) {
        self.keypad.release_all();
    }
}

impl Chip8 {
    /// Constructs a new CHIP-8 and appropriately initializes all fields so that
    /// it is ready for the first execution cycle. Essentially this means that
    /// the program counter is set to 0x200 and the default CHIP-8 charset is
    /// loaded at memory address `CHIP8_CHARSET_OFFSET`. Note that no program is
    /// loaded upon initialization.
    pub fn new() -> Self {
        Chip8::with_rng(StdRng::from_entropy())
    }

    /// Like `new`, but CXNN draws from a generator seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Chip8::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            memory: Memory::new(),
            registers: RegisterFile::new(),
            stack: CallStack::new(),
            timers: TimerUnit::new(),
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::new(),
            quirks: Quirks::default(),
            rng,
            execution: ExecutionState::Running,
            program: Vec::new(),
            draw: false,
        }
    }

    pub fn set_quirks(&mut self, quirks: Quirks) {
        self.quirks = quirks;
    }

    pub fn execution_state(&self) -> ExecutionState {
        self.execution
    }

    pub fn program_counter(&self) -> u16 {
        u16::from(self.registers.program_counter())
    }

    pub fn index(&self) -> u16 {
        u16::from(self.registers.index())
    }

    pub fn register(&self, reg: u8) -> u8 {
        self.registers.get(reg)
    }

    pub fn timers(&self) -> &TimerUnit {
        &self.timers
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Fetches the word the program counter points at.
    fn next_instruction(&self) -> Result<Opcode, Chip8Error> {
        let word = self
            .memory
            .read_word(u16::from(self.registers.program_counter()))?;
        Ok(Opcode::decode(word))
    }

    /// Completes a pending FX0A if a key was pressed since the wait began.
    fn poll_key(&mut self, register: u8) -> CycleStatus {
        match self.keypad.take_press() {
            Some(key) => {
                debug!("key {:X} pressed, resuming", key);
                self.registers.set(register, key);
                self.registers.advance(2);
                self.execution = ExecutionState::Running;
                CycleStatus::Executed
            }
            None => CycleStatus::AwaitingKey,
        }
    }

    fn random_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Chip8::new()
    }
}
