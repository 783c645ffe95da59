use std::time::Duration;

use crossbeam_channel::{select, tick, Receiver};
use log::{debug, error, info};

use crate::chip::{chip8::constants::CHIP8_TIMER_HZ, Chip, Chip8Error};

/// A commonly used default; the original interpreters ran at roughly 500.
pub const DEFAULT_INSTRUCTIONS_PER_SECOND: u32 = 700;

pub const MIN_INSTRUCTIONS_PER_SECOND: u32 = 10;

pub const MAX_INSTRUCTIONS_PER_SECOND: u32 = 10_000;

/// Represents an event to be processed by the event loop. It is generic
/// over the type representing the pressed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T> {
    /// Occurs when the key passed in the enum value was pressed.
    Key(T),

    /// Occurs when the key passed in the enum value was released.
    KeyUp(T),

    /// Indicates that all keys are released. Terminals only report key presses,
    /// so a text frontend assigns one key to releasing all keys.
    KeyRelease,

    /// Raises the instruction rate by one step.
    SpeedUp,

    /// Lowers the instruction rate by one step.
    SlowDown,

    /// Power cycles the machine, which also cancels a pending key wait.
    Reset,

    /// Shut down.
    Quit,
}

/// Whatever presents the machine's output to the user.
pub trait Frontend {
    /// Called with the output pins whenever they changed.
    fn present(&mut self, pixels: &[bool]);

    /// Called whenever the sound timer starts or stops running.
    fn sound(&mut self, active: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSettings {
    pub instructions_per_second: u32,

    /// By how much `SpeedUp` and `SlowDown` change the instruction rate.
    pub speed_step: u32,
}

impl Default for LoopSettings {
    fn default() -> Self {
        LoopSettings {
            instructions_per_second: DEFAULT_INSTRUCTIONS_PER_SECOND,
            speed_step: 100,
        }
    }
}

/// Moves the instruction rate one `step` up or down, staying within
/// `MIN_INSTRUCTIONS_PER_SECOND..=MAX_INSTRUCTIONS_PER_SECOND`.
fn adjust_rate(current: u32, step: u32, up: bool) -> u32 {
    let rate = if up {
        current.saturating_add(step)
    } else {
        current.saturating_sub(step)
    };
    rate.max(MIN_INSTRUCTIONS_PER_SECOND).min(MAX_INSTRUCTIONS_PER_SECOND)
}

fn period(hz: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(hz.max(1)))
}

/// The event loop. It owns the chip for as long as it runs, so instruction
/// execution, timer ticks and input never interleave. Each iteration handles
/// whichever of these is due first: (1) process an event, (2) cycle the chip at
/// the instruction rate, (3) tick the timers at 60Hz. Afterwards output is handed
/// to the frontend if it changed.
///
/// Returns `Ok` on `Event::Quit` or when all event senders are gone, and the error
/// if the chip fails fatally. Unsupported instructions are skipped.
pub fn event_loop<T, F>(
    chip: &mut T,
    events: &Receiver<Event<T::PinAddress>>,
    frontend: &mut F,
    settings: LoopSettings,
) -> Result<(), Chip8Error>
where
    T: Chip,
    F: Frontend,
{
    let timer_ticker = tick(period(CHIP8_TIMER_HZ));
    let mut instructions_per_second = settings
        .instructions_per_second
        .max(MIN_INSTRUCTIONS_PER_SECOND)
        .min(MAX_INSTRUCTIONS_PER_SECOND);
    let mut cycle_ticker = tick(period(instructions_per_second));
    let mut sound_active = chip.sound_active();
    info!(
        "running at {} instructions per second",
        instructions_per_second
    );

    loop {
        let mut rate_changed = false;
        select! {
            recv(events) -> event => match event {
                Ok(Event::Key(key)) => chip.set_input_pin(key, true),
                Ok(Event::KeyUp(key)) => chip.set_input_pin(key, false),
                Ok(Event::KeyRelease) => chip.reset_input_pins(),
                Ok(Event::SpeedUp) => {
                    instructions_per_second =
                        adjust_rate(instructions_per_second, settings.speed_step, true);
                    rate_changed = true;
                }
                Ok(Event::SlowDown) => {
                    instructions_per_second =
                        adjust_rate(instructions_per_second, settings.speed_step, false);
                    rate_changed = true;
                }
                Ok(Event::Reset) => chip.reset(),
                Ok(Event::Quit) | Err(_) => {
                    debug!("event loop shutting down");
                    return Ok(());
                }
            },
            recv(cycle_ticker) -> _ => match chip.cycle() {
                Ok(_) => {}
                Err(error) if !error.is_fatal() => {}
                Err(error) => {
                    error!("halting: {}", error);
                    return Err(error);
                }
            },
            recv(timer_ticker) -> _ => chip.tick_timers(),
        }

        if rate_changed {
            cycle_ticker = tick(period(instructions_per_second));
            info!(
                "running at {} instructions per second",
                instructions_per_second
            );
        }

        if chip.take_redraw() {
            frontend.present(chip.read_output_pins());
        }

        if chip.sound_active() != sound_active {
            sound_active = !sound_active;
            frontend.sound(sound_active);
        }
    }
}
