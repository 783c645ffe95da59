use crate::chip::{
    chip8::{
        opcodes::{Opcode, ProgramFlow},
        registers::wrapping_offset,
        Chip8,
    },
    Chip8Error,
};

fn skip_if(condition: bool) -> ProgramFlow {
    if condition {
        ProgramFlow::Skip
    } else {
        ProgramFlow::Next
    }
}

/// 00EE: return to the address on top of the stack.
pub(super) fn ret(_opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    let return_address = state.stack.pop(state.registers.program_counter())?;
    Ok(ProgramFlow::Jump(return_address))
}

pub(super) fn jump(opcode: &Opcode, _state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    Ok(ProgramFlow::Jump(opcode.nnn()))
}

/// 2NNN: push the address of the following instruction and jump to NNN.
pub(super) fn call(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    let program_counter = state.registers.program_counter();
    state
        .stack
        .push(wrapping_offset(program_counter, 2), program_counter)?;
    Ok(ProgramFlow::Jump(opcode.nnn()))
}

pub(super) fn skip_if_equal(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    Ok(skip_if(state.registers.get(opcode.x()) == opcode.nn()))
}

pub(super) fn skip_if_not_equal(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    Ok(skip_if(state.registers.get(opcode.x()) != opcode.nn()))
}

pub(super) fn skip_if_registers_equal(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    Ok(skip_if(
        state.registers.get(opcode.x()) == state.registers.get(opcode.y()),
    ))
}

pub(super) fn skip_if_registers_not_equal(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    Ok(skip_if(
        state.registers.get(opcode.x()) != state.registers.get(opcode.y()),
    ))
}

/// BNNN: jump to NNN + V0. The target wraps around at the end of the address space.
pub(super) fn jump_with_offset(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    let offset = u16::from(state.registers.get(0));
    Ok(ProgramFlow::Jump(wrapping_offset(opcode.nnn(), offset)))
}

pub(super) fn skip_if_key_pressed(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    let key = state.registers.get(opcode.x());
    Ok(skip_if(state.keypad.is_pressed(key)))
}

pub(super) fn skip_if_key_not_pressed(
    opcode: &Opcode,
    state: &mut Chip8,
) -> Result<ProgramFlow, Chip8Error> {
    let key = state.registers.get(opcode.x());
    Ok(skip_if(!state.keypad.is_pressed(key)))
}
