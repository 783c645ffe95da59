use ux::u12;

use crate::chip::{
    chip8::{
        constants::{CHIP8_CHARSET_GLYPH_LEN, CHIP8_CHARSET_OFFSET},
        opcodes::{Opcode, ProgramFlow},
        Chip8, ExecutionState,
    },
    Chip8Error,
};

/// 00E0
pub(super) fn clear_screen(_opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    state.frame_buffer.clear();
    state.draw = true;
    Ok(ProgramFlow::Next)
}

/// 0NNN: calls into machine code of the host CPU, which cannot be emulated.
pub(super) fn machine_code_call(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    Err(Chip8Error::UnsupportedInstruction {
        opcode: opcode.word(),
        address: u16::from(state.registers.program_counter()),
    })
}

/// DXYN: XOR an N byte sprite read from I onto the display at (Vx, Vy). VF is set
/// if a lit pixel was turned off.
pub(super) fn draw(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    let x = state.registers.get(opcode.x()) as usize;
    let y = state.registers.get(opcode.y()) as usize;
    let rows = state.memory.slice(
        usize::from(u16::from(state.registers.index())),
        opcode.n() as usize,
    )?;

    let collision = state.frame_buffer.draw_sprite(x, y, rows);
    state.registers.set_flag(collision);
    state.draw = true;
    Ok(ProgramFlow::Next)
}

/// FX07
pub(super) fn load_delay_timer(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    state.registers.set(opcode.x(), state.timers.delay());
    Ok(ProgramFlow::Next)
}

/// FX0A: store the next pressed key in Vx. Only a press reported after the wait
/// began counts; a key that is merely still held does not. The machine suspends
/// until the host presses one.
pub(super) fn await_key(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    state.keypad.discard_presses();
    state.execution = ExecutionState::AwaitingKey {
        register: opcode.x(),
    };
    Ok(ProgramFlow::Wait)
}

/// FX15
pub(super) fn set_delay_timer(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    state.timers.set_delay(state.registers.get(opcode.x()));
    Ok(ProgramFlow::Next)
}

/// FX18
pub(super) fn set_sound_timer(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    state.timers.set_sound(state.registers.get(opcode.x()));
    Ok(ProgramFlow::Next)
}

/// FX29: point I at the glyph for the low nibble of Vx.
pub(super) fn load_font_address(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    let character = u16::from(state.registers.get(opcode.x()) & 0xF);
    state.registers.set_index(u12::new(
        CHIP8_CHARSET_OFFSET + character * CHIP8_CHARSET_GLYPH_LEN,
    ));
    Ok(ProgramFlow::Next)
}

/// FX33: hundreds at I, tens at I + 1, ones at I + 2.
pub(super) fn store_bcd(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    let value = state.registers.get(opcode.x());
    let target = state
        .memory
        .slice_mut(usize::from(u16::from(state.registers.index())), 3)?;
    target.copy_from_slice(&[value / 100, value / 10 % 10, value % 10]);
    Ok(ProgramFlow::Next)
}

/// FX55: I itself is left unchanged.
pub(super) fn store_registers(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    let source = state.registers.range(opcode.x());
    let target = state.memory.slice_mut(
        usize::from(u16::from(state.registers.index())),
        source.len(),
    )?;
    target.copy_from_slice(source);
    Ok(ProgramFlow::Next)
}

/// FX65: I itself is left unchanged.
pub(super) fn load_registers(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    let source = state.memory.slice(
        usize::from(u16::from(state.registers.index())),
        opcode.x() as usize + 1,
    )?;
    state.registers.range_mut(opcode.x()).copy_from_slice(source);
    Ok(ProgramFlow::Next)
}
