use ux::u12;

use crate::chip::{
    chip8::{Chip8, CycleStatus, ExecutionState, Quirks},
    Chip, Chip8Error,
};

fn prepare_state_with_instructions(instructions: &[u16]) -> Chip8 {
    let program: Vec<u8> = instructions
        .iter()
        .flat_map(|instruction| instruction.to_be_bytes().to_vec())
        .collect();
    let mut chip8 = Chip8::with_seed(8);
    chip8.load_program_bytes(&program).unwrap();
    chip8
}

fn prepare_state_with_single_instruction(instruction: u16) -> Chip8 {
    prepare_state_with_instructions(&[instruction])
}

fn do_cycle(instruction: u16, before_cycle: fn(&mut Chip8), after_cycle: fn(&mut Chip8)) {
    let mut state = prepare_state_with_single_instruction(instruction);

    before_cycle(&mut state);
    state.cycle().unwrap();
    after_cycle(&mut state);
}

fn run_instructions(instructions: &[u16]) -> Chip8 {
    let mut state = prepare_state_with_instructions(instructions);
    for _ in instructions {
        state.cycle().unwrap();
    }
    state
}

#[test]
fn test_clear_screen() {
    do_cycle(
        0x00E0,
        |state| {
            state.frame_buffer.draw_sprite(0, 0, &[0xFF]);
            state.take_redraw();
        },
        |state| {
            assert!(state.read_output_pins().iter().all(|&pixel| !pixel));
            assert!(state.take_redraw());
            assert_eq!(state.program_counter(), 0x202);
        },
    )
}

#[test]
fn test_jump() {
    do_cycle(
        0x1CAF,
        |state| {
            assert_eq!(state.program_counter(), 0x200);
        },
        |state| {
            assert_eq!(state.program_counter(), 0xCAF);
        },
    )
}

#[test]
fn test_call() {
    do_cycle(
        0x2CAF,
        |state| {
            assert_eq!(state.program_counter(), 0x200);
        },
        |state| {
            assert_eq!(state.program_counter(), 0xCAF);
            assert_eq!(state.stack.peek(), Some(u12::new(0x202)));
            assert_eq!(state.stack.depth(), 1);
        },
    )
}

#[test]
fn test_call_and_return() {
    // 0x200: call 0x206; 0x202: jump to self; 0x204: padding; 0x206: return
    let mut state = prepare_state_with_instructions(&[0x2206, 0x1202, 0x0000, 0x00EE]);
    state.cycle().unwrap();
    assert_eq!(state.program_counter(), 0x206);
    state.cycle().unwrap();
    assert_eq!(state.program_counter(), 0x202);
    assert_eq!(state.stack.depth(), 0);
}

#[test]
fn test_nested_calls_up_to_sixteen_levels() {
    for depth in 1..=16u16 {
        // 0x200 calls level 0 at 0x300. Level k lives at 0x300 + 4k and calls level
        // k + 1 followed by a return, the deepest level only returns.
        let mut program = vec![0x0000u16; 0xA0];
        program[0] = 0x2300;
        program[1] = 0x1202;
        for level in 0..depth - 1 {
            let word = (0x100 + 4 * level as usize) / 2;
            program[word] = 0x2000 | (0x300 + 4 * (level + 1));
            program[word + 1] = 0x00EE;
        }
        program[(0x100 + 4 * (depth - 1) as usize) / 2] = 0x00EE;

        let mut state = prepare_state_with_instructions(&program);
        for _ in 0..depth {
            state.cycle().unwrap();
        }
        assert_eq!(state.stack.depth(), depth as usize);
        for _ in 0..depth {
            state.cycle().unwrap();
        }
        assert_eq!(state.stack.depth(), 0);
        assert_eq!(state.program_counter(), 0x202, "depth {}", depth);
    }
}

#[test]
fn test_seventeenth_call_overflows() {
    // 0x200: call 0x200, i.e. infinite recursion
    let mut state = prepare_state_with_single_instruction(0x2200);
    for _ in 0..16 {
        state.cycle().unwrap();
    }
    assert_eq!(
        state.cycle(),
        Err(Chip8Error::StackOverflow {
            address: 0x200,
            capacity: 16
        })
    );
    assert_eq!(state.stack.depth(), 16);
    assert_eq!(state.program_counter(), 0x200);
}

#[test]
fn test_return_with_empty_stack_underflows() {
    let mut state = prepare_state_with_single_instruction(0x00EE);
    assert_eq!(
        state.cycle(),
        Err(Chip8Error::StackUnderflow { address: 0x200 })
    );
    assert_eq!(state.program_counter(), 0x200);
}

#[test]
fn test_skip_if_equal() {
    do_cycle(
        0x34AF,
        |state| {
            state.registers.set(4, 0xAF);
            assert_eq!(state.program_counter(), 0x200);
        },
        |state| {
            assert_eq!(state.program_counter(), 0x204);
        },
    );

    do_cycle(
        0x34BF,
        |state| {
            state.registers.set(4, 0xAF);
            assert_eq!(state.program_counter(), 0x200);
        },
        |state| {
            assert_eq!(state.program_counter(), 0x202);
        },
    );
}

#[test]
fn test_skip_if_not_equal() {
    do_cycle(
        0x41AF,
        |state| state.registers.set(1, 0xAF),
        |state| assert_eq!(state.program_counter(), 0x202),
    );
    do_cycle(
        0x41AF,
        |state| state.registers.set(1, 0xAE),
        |state| assert_eq!(state.program_counter(), 0x204),
    );
}

#[test]
fn test_skip_if_registers_equal() {
    do_cycle(
        0x5120,
        |state| {
            state.registers.set(1, 7);
            state.registers.set(2, 7);
        },
        |state| assert_eq!(state.program_counter(), 0x204),
    );
    do_cycle(
        0x9120,
        |state| {
            state.registers.set(1, 7);
            state.registers.set(2, 7);
        },
        |state| assert_eq!(state.program_counter(), 0x202),
    );
    do_cycle(
        0x9120,
        |state| state.registers.set(1, 7),
        |state| assert_eq!(state.program_counter(), 0x204),
    );
}

#[test]
fn test_load_and_add_immediate() {
    let state = run_instructions(&[0x62FF, 0x7211, 0x7311, 0x73FF]);
    assert_eq!(state.register(2), 0x10);
    assert_eq!(state.register(3), 0x10);
    // 7XNN never touches the flag
    assert_eq!(state.register(0xF), 0);
}

#[test]
fn test_register_logic() {
    let state = run_instructions(&[0x60F0, 0x613C, 0x8201, 0x8211, 0x8312, 0x8333, 0x8410]);
    assert_eq!(state.register(2), 0x3C | 0xF0);
    assert_eq!(state.register(3), 0x00);
    assert_eq!(state.register(4), 0x3C);
}

#[test]
fn test_add_registers_sets_carry() {
    for &(a, b) in &[(0u8, 0u8), (1, 254), (1, 255), (200, 100), (255, 255), (128, 128)] {
        for &(x, y) in &[(0x0u8, 0x1u8), (0x5, 0xA), (0xE, 0x3)] {
            let state = run_instructions(&[
                0x6000 | u16::from(x) << 8 | u16::from(a),
                0x6000 | u16::from(y) << 8 | u16::from(b),
                0x8004 | u16::from(x) << 8 | u16::from(y) << 4,
            ]);
            let sum = u16::from(a) + u16::from(b);
            assert_eq!(state.register(x), (sum % 256) as u8);
            assert_eq!(state.register(0xF), (sum > 255) as u8, "{} + {}", a, b);
        }
    }
}

#[test]
fn test_add_registers_exhaustive() {
    let mut state = prepare_state_with_single_instruction(0x8124);
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            state.registers.set_program_counter(u12::new(0x200));
            state.registers.set(1, a);
            state.registers.set(2, b);
            state.cycle().unwrap();
            assert_eq!(state.register(1), a.wrapping_add(b));
            assert_eq!(state.register(0xF) == 1, u16::from(a) + u16::from(b) > 255);
        }
    }
}

#[test]
fn test_sub_exhaustive() {
    let mut state = prepare_state_with_single_instruction(0x8125);
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            state.registers.set_program_counter(u12::new(0x200));
            state.registers.set(1, a);
            state.registers.set(2, b);
            state.cycle().unwrap();
            assert_eq!(state.register(1), a.wrapping_sub(b));
            assert_eq!(state.register(0xF), if b > a { 0 } else { 1 });
        }
    }
}

#[test]
fn test_sub_reversed_writes_vx() {
    do_cycle(
        0x8127,
        |state| {
            state.registers.set(1, 3);
            state.registers.set(2, 10);
        },
        |state| {
            assert_eq!(state.register(1), 7);
            assert_eq!(state.register(2), 10);
            assert_eq!(state.register(0xF), 1);
        },
    );
    do_cycle(
        0x8127,
        |state| {
            state.registers.set(1, 10);
            state.registers.set(2, 3);
        },
        |state| {
            assert_eq!(state.register(1), 3u8.wrapping_sub(10));
            assert_eq!(state.register(2), 3);
            assert_eq!(state.register(0xF), 0);
        },
    );
}

#[test]
fn test_shifts_only_touch_vx_and_vf() {
    for &instruction in &[0x8126u16, 0x812E] {
        for value in 0..=255u8 {
            let mut state = prepare_state_with_single_instruction(instruction);
            for reg in 0..0xF {
                state.registers.set(reg, 0x40 + reg);
            }
            state.registers.set(1, value);
            state.cycle().unwrap();

            if instruction == 0x8126 {
                assert_eq!(state.register(1), value >> 1);
                assert_eq!(state.register(0xF), value & 0x01);
            } else {
                assert_eq!(state.register(1), value << 1);
                assert_eq!(state.register(0xF), value >> 7);
            }
            for reg in (0..0xF).filter(|&reg| reg != 1) {
                assert_eq!(state.register(reg), 0x40 + reg);
            }
        }
    }
}

#[test]
fn test_flag_wins_when_vf_is_the_target() {
    do_cycle(
        0x8F14,
        |state| {
            state.registers.set(0xF, 0xFF);
            state.registers.set(1, 0x01);
        },
        |state| assert_eq!(state.register(0xF), 1),
    );
}

#[test]
fn test_load_index_and_jump_with_offset() {
    let state = run_instructions(&[0xA123]);
    assert_eq!(state.index(), 0x123);

    do_cycle(
        0xB300,
        |state| state.registers.set(0, 0x20),
        |state| assert_eq!(state.program_counter(), 0x320),
    );
}

#[test]
fn test_jump_with_offset_wraps_without_error() {
    do_cycle(
        0xBFFE,
        |state| state.registers.set(0, 0x03),
        |state| assert_eq!(state.program_counter(), 0x001),
    );
}

#[test]
fn test_random_is_masked() {
    do_cycle(
        0xC500,
        |state| state.registers.set(5, 0xAA),
        |state| assert_eq!(state.register(5), 0),
    );

    let mut state = prepare_state_with_single_instruction(0xC50F);
    for _ in 0..100 {
        state.registers.set_program_counter(u12::new(0x200));
        state.cycle().unwrap();
        assert_eq!(state.register(5) & 0xF0, 0);
    }
}

#[test]
fn test_random_draws_different_values() {
    let mut state = prepare_state_with_single_instruction(0xC5FF);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        state.registers.set_program_counter(u12::new(0x200));
        state.cycle().unwrap();
        seen.insert(state.register(5));
    }
    assert!(seen.len() > 1);
}

#[test]
fn test_draw_sets_pixels_and_flag() {
    // draw the glyph for 0 (V2 is zero) at (2, 3)
    let mut state = prepare_state_with_instructions(&[0x6002, 0x6103, 0xF229, 0xD015, 0xD015]);
    for _ in 0..4 {
        state.cycle().unwrap();
    }
    assert_eq!(state.register(0xF), 0);
    assert!(state.take_redraw());
    assert!(state.frame_buffer.pixel(2, 3));
    assert!(state.frame_buffer.pixel(5, 3));
    assert!(state.frame_buffer.pixel(2, 4));
    assert!(!state.frame_buffer.pixel(3, 4));

    state.cycle().unwrap();
    assert_eq!(state.register(0xF), 1);
    assert!(state.read_output_pins().iter().all(|&pixel| !pixel));
}

#[test]
fn test_draw_twice_restores_framebuffer() {
    let mut state = prepare_state_with_instructions(&[0xD015, 0xD125, 0xD125]);
    state.registers.set_index(u12::new(0x50 + 5 * 8));
    state.registers.set(1, 60);
    state.registers.set(2, 30);
    state.cycle().unwrap();
    let before = state.frame_buffer.clone();

    state.cycle().unwrap();
    assert_eq!(state.register(0xF), 0);
    state.cycle().unwrap();
    assert_eq!(state.register(0xF), 1);
    assert_eq!(state.frame_buffer, before);
}

#[test]
fn test_draw_past_end_of_memory_fails_cleanly() {
    let mut state = prepare_state_with_single_instruction(0xD01F);
    state.registers.set_index(u12::new(0xFF8));
    state.registers.set(0xF, 0x42);
    assert_eq!(
        state.cycle(),
        Err(Chip8Error::MemoryOutOfBounds { address: 0x1000 })
    );
    assert_eq!(state.register(0xF), 0x42);
    assert!(state.read_output_pins().iter().all(|&pixel| !pixel));
    assert_eq!(state.program_counter(), 0x200);
}

#[test]
fn test_skip_on_keys() {
    do_cycle(
        0xE39E,
        |state| {
            state.registers.set(3, 0xB);
            state.set_input_pin(0xB, true);
        },
        |state| assert_eq!(state.program_counter(), 0x204),
    );
    do_cycle(
        0xE39E,
        |state| state.registers.set(3, 0xB),
        |state| assert_eq!(state.program_counter(), 0x202),
    );
    do_cycle(
        0xE3A1,
        |state| state.registers.set(3, 0xB),
        |state| assert_eq!(state.program_counter(), 0x204),
    );
    do_cycle(
        0xE3A1,
        |state| {
            state.registers.set(3, 0xB);
            state.set_input_pin(0xB, true);
        },
        |state| assert_eq!(state.program_counter(), 0x202),
    );
}

#[test]
fn test_timers_are_set_and_read() {
    let mut state = prepare_state_with_instructions(&[0x601E, 0xF015, 0xF018, 0xF207]);
    for _ in 0..3 {
        state.cycle().unwrap();
    }
    assert_eq!(state.timers.delay(), 30);
    assert_eq!(state.timers.sound(), 30);
    assert!(state.sound_active());

    state.tick_timers();
    state.cycle().unwrap();
    assert_eq!(state.register(2), 29);
}

#[test]
fn test_cycles_do_not_decrement_timers() {
    let mut state = prepare_state_with_instructions(&[0x601E, 0xF015, 0x1204]);
    for _ in 0..100 {
        state.cycle().unwrap();
    }
    assert_eq!(state.timers.delay(), 30);
}

#[test]
fn test_delay_timer_drains_after_thirty_ticks() {
    let mut state = prepare_state_with_instructions(&[0x601E, 0xF015, 0xF107]);
    state.cycle().unwrap();
    state.cycle().unwrap();
    for _ in 0..30 {
        state.tick_timers();
    }
    state.cycle().unwrap();
    assert_eq!(state.register(1), 0);
}

#[test]
fn test_await_key_suspends_until_key_press() {
    let mut state = prepare_state_with_instructions(&[0xF50A, 0x6101]);
    assert_eq!(state.cycle(), Ok(CycleStatus::AwaitingKey));
    assert_eq!(
        state.execution_state(),
        ExecutionState::AwaitingKey { register: 5 }
    );

    for _ in 0..10 {
        assert_eq!(state.cycle(), Ok(CycleStatus::AwaitingKey));
        assert_eq!(state.program_counter(), 0x200);
        assert_eq!(state.register(1), 0);
    }

    state.set_input_pin(0xC, true);
    assert_eq!(state.cycle(), Ok(CycleStatus::Executed));
    assert_eq!(state.register(5), 0xC);
    assert_eq!(state.program_counter(), 0x202);
    assert_eq!(state.execution_state(), ExecutionState::Running);

    state.cycle().unwrap();
    assert_eq!(state.register(1), 1);
}

#[test]
fn test_await_key_ignores_key_held_before_the_wait() {
    let mut state = prepare_state_with_single_instruction(0xF30A);
    state.set_input_pin(0x7, true);
    assert_eq!(state.cycle(), Ok(CycleStatus::AwaitingKey));
    assert_eq!(state.cycle(), Ok(CycleStatus::AwaitingKey));
    assert_eq!(state.register(3), 0);

    state.set_input_pin(0x9, true);
    assert_eq!(state.cycle(), Ok(CycleStatus::Executed));
    assert_eq!(state.register(3), 0x9);
    assert_eq!(state.program_counter(), 0x202);
}

#[test]
fn test_consecutive_key_waits_need_separate_presses() {
    let mut state = prepare_state_with_instructions(&[0xF00A, 0xF10A]);
    assert_eq!(state.cycle(), Ok(CycleStatus::AwaitingKey));
    state.set_input_pin(0x3, true);
    assert_eq!(state.cycle(), Ok(CycleStatus::Executed));
    assert_eq!(state.register(0), 0x3);

    // key 3 is still held
    assert_eq!(state.cycle(), Ok(CycleStatus::AwaitingKey));
    assert_eq!(state.cycle(), Ok(CycleStatus::AwaitingKey));
    assert_eq!(state.register(1), 0);

    state.set_input_pin(0x3, true);
    assert_eq!(state.cycle(), Ok(CycleStatus::Executed));
    assert_eq!(state.register(1), 0x3);
    assert_eq!(state.program_counter(), 0x204);
}

#[test]
fn test_await_key_takes_a_press_released_before_the_poll() {
    let mut state = prepare_state_with_single_instruction(0xF20A);
    assert_eq!(state.cycle(), Ok(CycleStatus::AwaitingKey));
    state.set_input_pin(0xB, true);
    state.set_input_pin(0xB, false);
    assert_eq!(state.cycle(), Ok(CycleStatus::Executed));
    assert_eq!(state.register(2), 0xB);
}

#[test]
fn test_timers_keep_running_while_awaiting_key() {
    let mut state = prepare_state_with_instructions(&[0x600A, 0xF015, 0xF00A]);
    state.cycle().unwrap();
    state.cycle().unwrap();
    assert_eq!(state.cycle(), Ok(CycleStatus::AwaitingKey));
    for _ in 0..4 {
        state.tick_timers();
        state.cycle().unwrap();
    }
    assert_eq!(state.timers.delay(), 6);
}

#[test]
fn test_reset_cancels_key_wait() {
    let mut state = prepare_state_with_instructions(&[0x6105, 0xF00A]);
    state.cycle().unwrap();
    state.cycle().unwrap();
    state.reset();
    assert_eq!(state.execution_state(), ExecutionState::Running);
    assert_eq!(state.program_counter(), 0x200);
    assert_eq!(state.register(1), 0);
    // the program is still there
    state.cycle().unwrap();
    assert_eq!(state.register(1), 5);
}

#[test]
fn test_add_to_index_wraps() {
    do_cycle(
        0xF11E,
        |state| {
            state.registers.set_index(u12::new(0xFFE));
            state.registers.set(1, 0x03);
            state.registers.set(0xF, 0x42);
        },
        |state| {
            assert_eq!(state.index(), 0x001);
            assert_eq!(state.register(0xF), 0x42);
        },
    );
}

#[test]
fn test_add_to_index_overflow_flag_quirk() {
    do_cycle(
        0xF11E,
        |state| {
            state.set_quirks(Quirks {
                index_overflow_sets_vf: true,
            });
            state.registers.set_index(u12::new(0xFFE));
            state.registers.set(1, 0x03);
        },
        |state| {
            assert_eq!(state.index(), 0x001);
            assert_eq!(state.register(0xF), 1);
        },
    );
    do_cycle(
        0xF11E,
        |state| {
            state.set_quirks(Quirks {
                index_overflow_sets_vf: true,
            });
            state.registers.set_index(u12::new(0x100));
            state.registers.set(1, 0x03);
            state.registers.set(0xF, 0x42);
        },
        |state| {
            assert_eq!(state.index(), 0x103);
            assert_eq!(state.register(0xF), 0);
        },
    );
}

#[test]
fn test_font_address() {
    for digit in 0..=0xFu8 {
        let mut state = prepare_state_with_single_instruction(0xF429);
        state.registers.set(4, digit);
        state.cycle().unwrap();
        assert_eq!(state.index(), 0x50 + 5 * u16::from(digit));
    }
}

#[test]
fn test_bcd() {
    for &(value, digits) in &[(0u8, [0u8, 0, 0]), (7, [0, 0, 7]), (42, [0, 4, 2]), (255, [2, 5, 5])] {
        let mut state = prepare_state_with_single_instruction(0xF233);
        state.registers.set(2, value);
        state.registers.set_index(u12::new(0x300));
        state.cycle().unwrap();
        assert_eq!(state.memory.slice(0x300, 3).unwrap(), &digits);
    }
}

#[test]
fn test_bcd_out_of_bounds() {
    let mut state = prepare_state_with_single_instruction(0xF233);
    state.registers.set_index(u12::new(0xFFE));
    assert_eq!(
        state.cycle(),
        Err(Chip8Error::MemoryOutOfBounds { address: 0x1000 })
    );
    assert_eq!(state.memory.read_byte(0xFFE), Ok(0));
}

#[test]
fn test_store_and_load_registers() {
    let mut state = prepare_state_with_instructions(&[0xF255, 0xF365]);
    state.registers.set_index(u12::new(0x400));
    state.registers.range_mut(0xF).copy_from_slice(&[
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    ]);
    state.cycle().unwrap();
    assert_eq!(state.memory.slice(0x400, 4).unwrap(), &[1, 2, 3, 0]);
    assert_eq!(state.index(), 0x400);

    state.registers.range_mut(0xF).copy_from_slice(&[0; 16]);
    state.cycle().unwrap();
    assert_eq!(state.registers.range(4), &[1, 2, 3, 0, 0]);
}

#[test]
fn test_store_registers_out_of_bounds_writes_nothing() {
    let mut state = prepare_state_with_single_instruction(0xFF55);
    state.registers.set_index(u12::new(0xFF8));
    state.registers.range_mut(0xF).copy_from_slice(&[0xEE; 16]);
    assert_eq!(
        state.cycle(),
        Err(Chip8Error::MemoryOutOfBounds { address: 0x1000 })
    );
    assert_eq!(state.memory.slice(0xFF8, 8).unwrap(), &[0; 8]);
}

#[test]
fn test_load_registers_out_of_bounds_changes_nothing() {
    let mut state = prepare_state_with_single_instruction(0xFF65);
    state.registers.set_index(u12::new(0xFFF));
    state.registers.set(0, 0x11);
    assert!(state.cycle().is_err());
    assert_eq!(state.register(0), 0x11);
}

#[test]
fn test_machine_code_call_is_skipped() {
    let mut state = prepare_state_with_instructions(&[0x0123, 0x6107]);
    assert_eq!(
        state.cycle(),
        Err(Chip8Error::UnsupportedInstruction {
            opcode: 0x0123,
            address: 0x200
        })
    );
    assert_eq!(state.program_counter(), 0x202);
    state.cycle().unwrap();
    assert_eq!(state.register(1), 7);
}

#[test]
fn test_illegal_opcode_halts_in_place() {
    let mut state = prepare_state_with_single_instruction(0x800F);
    let error = state.cycle().unwrap_err();
    assert_eq!(
        error,
        Chip8Error::IllegalOpcode {
            opcode: 0x800F,
            address: 0x200
        }
    );
    assert!(error.is_fatal());
    assert_eq!(state.program_counter(), 0x200);
}

#[test]
fn test_fetch_past_end_of_memory() {
    let mut state = prepare_state_with_single_instruction(0x1FFF);
    state.cycle().unwrap();
    assert_eq!(
        state.cycle(),
        Err(Chip8Error::FetchOutOfBounds { address: 0xFFF })
    );
}

#[test]
fn test_program_that_is_too_large_is_rejected() {
    let mut state = Chip8::new();
    assert_eq!(
        state.load_program_bytes(&vec![0; 4096 - 0x200 + 1]),
        Err(Chip8Error::RomTooLarge {
            size: 3585,
            max_size: 3584
        })
    );
    assert_eq!(state.load_program_bytes(&vec![0; 4096 - 0x200]), Ok(3584));
}

#[test]
fn test_load_program_from_missing_file() {
    let mut state = Chip8::new();
    let error = state
        .load_program(std::path::Path::new("/this/rom/does/not/exist.ch8"))
        .unwrap_err();
    assert!(error.to_string().contains("exist.ch8"));
}

#[test]
fn test_end_to_end_program() {
    let mut state = Chip8::new();
    state
        .load_program_bytes(&[0x60, 0x05, 0x61, 0x03, 0x80, 0x14, 0x00, 0x00])
        .unwrap();
    for _ in 0..3 {
        assert_eq!(state.cycle(), Ok(CycleStatus::Executed));
    }
    assert_eq!(state.register(0), 8);
    assert_eq!(state.register(0xF), 0);
    assert_eq!(state.program_counter(), 0x206);

    let error = state.cycle().unwrap_err();
    assert_eq!(
        error,
        Chip8Error::UnsupportedInstruction {
            opcode: 0x0000,
            address: 0x206
        }
    );
    assert!(!error.is_fatal());
}
