/// The delay and sound timers. Both count down by one per tick of the 60Hz timer
/// clock until they reach zero. They are ticked by the host, independently of how
/// many instructions run in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerUnit {
    delay_timer: u8,
    sound_timer: u8,
}

impl TimerUnit {
    pub fn new() -> Self {
        TimerUnit::default()
    }

    pub fn tick(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    pub fn delay(&self) -> u8 {
        self.delay_timer
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay_timer = value;
    }

    pub fn sound(&self) -> u8 {
        self.sound_timer
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound_timer = value;
    }

    /// The tone should be audible exactly while the sound timer is non-zero.
    pub fn sound_active(&self) -> bool {
        self.sound_timer > 0
    }
}
