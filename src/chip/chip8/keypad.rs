use crate::chip::chip8::constants::CHIP8_KEY_COUNT;

/// The state of the 16 keys. Only the host changes it; instructions merely look at
/// what is pressed at the instant they execute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; CHIP8_KEY_COUNT],

    /// Keys the host reported as pressed since `discard_presses` was last called.
    /// A key reported again while held counts as a new press.
    presses: [bool; CHIP8_KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    /// Only the low nibble of `key` is used, as on the original hardware.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xF) as usize]
    }

    pub fn set(&mut self, key: u8, pressed: bool) {
        self.keys[(key & 0xF) as usize] = pressed;
        if pressed {
            self.presses[(key & 0xF) as usize] = true;
        }
    }

    pub fn release_all(&mut self) {
        self.keys = [false; CHIP8_KEY_COUNT];
        self.discard_presses();
    }

    pub fn discard_presses(&mut self) {
        self.presses = [false; CHIP8_KEY_COUNT];
    }

    /// The lowest key pressed since the last call, if any. Forgets all recorded presses.
    pub fn take_press(&mut self) -> Option<u8> {
        let key = self.presses.iter().position(|&pressed| pressed);
        self.discard_presses();
        key.map(|key| key as u8)
    }

    /// The lowest key that is currently pressed, if any.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&pressed| pressed).map(|key| key as u8)
    }
}
