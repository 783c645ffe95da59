use log::warn;

use crate::chip::{
    chip8::constants::{CHIP8_DISPLAY_HEIGHT, CHIP8_DISPLAY_WIDTH},
    event_loop::Frontend,
};

use cursive::{
    theme::{BaseColor, Color, ColorStyle},
    view::View,
    CbSink, Cursive, Printer, Vec2,
};

/// Represents the display of the CHIP-8, plus one status line below it.
pub struct Display {
    pixels: [bool; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT],
    sound: bool,
}

impl Display {
    /// Creates a new display from a slice.
    ///
    /// # Panics
    /// In case `pixels` does not hold exactly one entry per pixel.
    pub fn new(pixels: &[bool], sound: bool) -> Self {
        assert_eq!(pixels.len(), CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT);
        let mut tmp = [false; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT];
        tmp.copy_from_slice(pixels);
        Display { pixels: tmp, sound }
    }

    fn lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(|(i, _)| (i % CHIP8_DISPLAY_WIDTH, i / CHIP8_DISPLAY_WIDTH))
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new(&[false; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT], false)
    }
}

/// Implements cursive::view::View for Display to enable drawing it
/// as a View out of the box.
impl View for Display {
    fn draw(&self, printer: &Printer) {
        printer.with_color(
            ColorStyle::new(Color::Dark(BaseColor::Black), Color::RgbLowRes(0, 0, 0)),
            |printer| {
                for position in self.lit() {
                    printer.print(position, " ");
                }
            },
        );
        if self.sound {
            printer.print((0, CHIP8_DISPLAY_HEIGHT), "beep");
        }
    }

    fn required_size(&mut self, _: Vec2) -> Vec2 {
        Vec2 {
            x: CHIP8_DISPLAY_WIDTH,
            y: CHIP8_DISPLAY_HEIGHT + 1,
        }
    }
}

/// Pushes the machine's output into a running cursive UI.
pub struct CursiveFrontend {
    gfx_sink: CbSink,
    pixels: Vec<bool>,
    sound: bool,
}

impl CursiveFrontend {
    pub fn new(gfx_sink: CbSink) -> Self {
        CursiveFrontend {
            gfx_sink,
            pixels: vec![false; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT],
            sound: false,
        }
    }

    fn update_ui(&self) {
        let display = Display::new(&self.pixels, self.sound);
        let sent = self.gfx_sink.send(Box::new(move |s: &mut Cursive| {
            s.pop_layer();
            s.add_layer(display);
        }));
        if sent.is_err() {
            warn!("sending updated display failed, the UI is gone");
        }
    }
}

impl Frontend for CursiveFrontend {
    fn present(&mut self, pixels: &[bool]) {
        self.pixels.copy_from_slice(pixels);
        self.update_ui();
    }

    fn sound(&mut self, active: bool) {
        self.sound = active;
        self.update_ui();
    }
}
