use ux::u12;

use crate::chip::{
    chip8::{
        opcodes::{Opcode, ProgramFlow},
        Chip8,
    },
    Chip8Error,
};

/// Applies `f` to Vx and Vy, stores the result in Vx and, if `f` reports one, the
/// flag in VF. The flag is written last, so it wins when x is F.
fn modify_registers(
    opcode: &Opcode,
    state: &mut Chip8,
    f: fn(u8, u8) -> (u8, Option<bool>),
) -> Result<ProgramFlow, Chip8Error> {
    let (value, flag) = f(
        state.registers.get(opcode.x()),
        state.registers.get(opcode.y()),
    );
    state.registers.set(opcode.x(), value);
    if let Some(flag) = flag {
        state.registers.set_flag(flag);
    }
    Ok(ProgramFlow::Next)
}

/// 6XNN
pub(super) fn load(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    state.registers.set(opcode.x(), opcode.nn());
    Ok(ProgramFlow::Next)
}

/// 7XNN: wraps around without touching VF.
pub(super) fn add(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    let value = state.registers.get(opcode.x()).wrapping_add(opcode.nn());
    state.registers.set(opcode.x(), value);
    Ok(ProgramFlow::Next)
}

pub(super) fn mov(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    modify_registers(opcode, state, |_, vy| (vy, None))
}

pub(super) fn or(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    modify_registers(opcode, state, |vx, vy| (vx | vy, None))
}

pub(super) fn and(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    modify_registers(opcode, state, |vx, vy| (vx & vy, None))
}

pub(super) fn xor(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    modify_registers(opcode, state, |vx, vy| (vx ^ vy, None))
}

/// 8XY4: VF is the carry.
pub(super) fn add_registers(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    modify_registers(opcode, state, |vx, vy| {
        let (result, carry) = vx.overflowing_add(vy);
        (result, Some(carry))
    })
}

/// 8XY5: VF is the inverted borrow.
pub(super) fn sub(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    modify_registers(opcode, state, |vx, vy| {
        let (result, borrow) = vx.overflowing_sub(vy);
        (result, Some(!borrow))
    })
}

/// 8XY6: Vy is ignored.
pub(super) fn shift_right(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    modify_registers(opcode, state, |vx, _| (vx >> 1, Some(vx & 0x01 != 0)))
}

/// 8XY7: Vx = Vy - Vx, VF is the inverted borrow.
pub(super) fn sub_reversed(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    modify_registers(opcode, state, |vx, vy| {
        let (result, borrow) = vy.overflowing_sub(vx);
        (result, Some(!borrow))
    })
}

/// 8XYE: Vy is ignored.
pub(super) fn shift_left(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    modify_registers(opcode, state, |vx, _| (vx << 1, Some(vx & 0x80 != 0)))
}

/// ANNN
pub(super) fn load_index(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    state.registers.set_index(opcode.nnn());
    Ok(ProgramFlow::Next)
}

/// FX1E: I wraps around at 0x1000. Whether VF reports that depends on the quirks.
pub(super) fn add_to_index(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    let sum = u16::from(state.registers.index()) + u16::from(state.registers.get(opcode.x()));
    state.registers.set_index(u12::new(sum & 0x0FFF));
    if state.quirks.index_overflow_sets_vf {
        state.registers.set_flag(sum > 0x0FFF);
    }
    Ok(ProgramFlow::Next)
}

/// CXNN
pub(super) fn random(opcode: &Opcode, state: &mut Chip8) -> Result<ProgramFlow, Chip8Error> {
    let value = state.random_byte() & opcode.nn();
    state.registers.set(opcode.x(), value);
    Ok(ProgramFlow::Next)
}
