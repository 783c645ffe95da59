#[macro_use]
mod macros;
mod arithmetic_and_logic;
mod program_flow;
mod system;

use ux::u12;

use crate::chip::{chip8::Chip8, Chip8Error};

/// Represents a CHIP-8 opcode. A CHIP-8 opcode is two bytes long and is split into
/// nibble sized fields:
/// - `op`  `[o___]` broad categorization of the instruction
/// - `x`   `[_x__]` a register index, or the last register of a range V0..Vx
/// - `y`   `[__y_]` a second register index
/// - `n`   `[___n]` a 4 bit immediate, or a sub operation within a category
/// - `nn`  `[__nn]` an 8 bit immediate
/// - `nnn` `[_nnn]` a 12 bit address
///
/// Decoding is total: every 16 bit word yields a set of fields, whether or not an
/// instruction exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    word: u16,
}

impl Opcode {
    /// Constructs a new `Opcode` from its big endian byte representation.
    pub fn new(bytes: &[u8; 2]) -> Opcode {
        Opcode::decode(u16::from_be_bytes(*bytes))
    }

    pub fn decode(word: u16) -> Opcode {
        Opcode { word }
    }

    pub fn word(&self) -> u16 {
        self.word
    }

    /// Returns the four nibbles, most significant first.
    pub fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.op(), self.x(), self.y(), self.n())
    }

    pub fn op(&self) -> u8 {
        (self.word >> 12) as u8
    }

    pub fn x(&self) -> u8 {
        ((self.word & 0x0F00) >> 8) as u8
    }

    pub fn y(&self) -> u8 {
        ((self.word & 0x00F0) >> 4) as u8
    }

    pub fn n(&self) -> u8 {
        (self.word & 0x000F) as u8
    }

    pub fn nn(&self) -> u8 {
        (self.word & 0x00FF) as u8
    }

    pub fn nnn(&self) -> u12 {
        u12::new(self.word & 0x0FFF)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04X}", self.word)
    }
}

/// What the program counter does once an instruction has executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ProgramFlow {
    /// Continue with the following instruction.
    Next,
    /// Skip the following instruction.
    Skip,
    /// Continue at the given address.
    Jump(u12),
    /// Stay on the current instruction; the machine is suspended.
    Wait,
}

/// Executes an instruction against the machine. A handler either applies its whole
/// effect or returns an error without having changed anything.
pub(super) type Handler = fn(&Opcode, &mut Chip8) -> Result<ProgramFlow, Chip8Error>;

/// One entry of the instruction table.
pub(super) struct InstructionPattern {
    pub mask: u16,
    pub expected: u16,
    pub mnemonic: &'static str,
    pub handler: Handler,
}

impl InstructionPattern {
    pub fn matches(&self, word: u16) -> bool {
        word & self.mask == self.expected
    }
}

impl std::fmt::Debug for InstructionPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({:04X}/{:04X})",
            self.mnemonic, self.expected, self.mask
        )
    }
}

define_instruction_table! {
    0x00E0 / 0xFFFF => "CLS", system::clear_screen;
    0x00EE / 0xFFFF => "RET", program_flow::ret;

    0xE09E / 0xF0FF => "SKP Vx", program_flow::skip_if_key_pressed;
    0xE0A1 / 0xF0FF => "SKNP Vx", program_flow::skip_if_key_not_pressed;
    0xF007 / 0xF0FF => "LD Vx, DT", system::load_delay_timer;
    0xF00A / 0xF0FF => "LD Vx, K", system::await_key;
    0xF015 / 0xF0FF => "LD DT, Vx", system::set_delay_timer;
    0xF018 / 0xF0FF => "LD ST, Vx", system::set_sound_timer;
    0xF01E / 0xF0FF => "ADD I, Vx", arithmetic_and_logic::add_to_index;
    0xF029 / 0xF0FF => "LD F, Vx", system::load_font_address;
    0xF033 / 0xF0FF => "LD B, Vx", system::store_bcd;
    0xF055 / 0xF0FF => "LD [I], Vx", system::store_registers;
    0xF065 / 0xF0FF => "LD Vx, [I]", system::load_registers;

    0x5000 / 0xF00F => "SE Vx, Vy", program_flow::skip_if_registers_equal;
    0x8000 / 0xF00F => "LD Vx, Vy", arithmetic_and_logic::mov;
    0x8001 / 0xF00F => "OR Vx, Vy", arithmetic_and_logic::or;
    0x8002 / 0xF00F => "AND Vx, Vy", arithmetic_and_logic::and;
    0x8003 / 0xF00F => "XOR Vx, Vy", arithmetic_and_logic::xor;
    0x8004 / 0xF00F => "ADD Vx, Vy", arithmetic_and_logic::add_registers;
    0x8005 / 0xF00F => "SUB Vx, Vy", arithmetic_and_logic::sub;
    0x8006 / 0xF00F => "SHR Vx", arithmetic_and_logic::shift_right;
    0x8007 / 0xF00F => "SUBN Vx, Vy", arithmetic_and_logic::sub_reversed;
    0x800E / 0xF00F => "SHL Vx", arithmetic_and_logic::shift_left;
    0x9000 / 0xF00F => "SNE Vx, Vy", program_flow::skip_if_registers_not_equal;

    0x0000 / 0xF000 => "SYS addr", system::machine_code_call;
    0x1000 / 0xF000 => "JP addr", program_flow::jump;
    0x2000 / 0xF000 => "CALL addr", program_flow::call;
    0x3000 / 0xF000 => "SE Vx, byte", program_flow::skip_if_equal;
    0x4000 / 0xF000 => "SNE Vx, byte", program_flow::skip_if_not_equal;
    0x6000 / 0xF000 => "LD Vx, byte", arithmetic_and_logic::load;
    0x7000 / 0xF000 => "ADD Vx, byte", arithmetic_and_logic::add;
    0xA000 / 0xF000 => "LD I, addr", arithmetic_and_logic::load_index;
    0xB000 / 0xF000 => "JP V0, addr", program_flow::jump_with_offset;
    0xC000 / 0xF000 => "RND Vx, byte", arithmetic_and_logic::random;
    0xD000 / 0xF000 => "DRW Vx, Vy, n", system::draw;
}

/// Finds the first table entry matching `word`.
pub(super) fn lookup(word: u16) -> Option<&'static InstructionPattern> {
    INSTRUCTION_TABLE.iter().find(|pattern| pattern.matches(word))
}
