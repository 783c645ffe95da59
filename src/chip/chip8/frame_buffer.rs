use crate::chip::chip8::constants::{CHIP8_DISPLAY_HEIGHT, CHIP8_DISPLAY_WIDTH};

/// The 64x32 monochrome display, stored row by row. Pixels are addressed modulo the
/// display size, so sprites wrap around the edges.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [bool; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT],
}

fn translate(x: usize, y: usize) -> usize {
    (x % CHIP8_DISPLAY_WIDTH) + (y % CHIP8_DISPLAY_HEIGHT) * CHIP8_DISPLAY_WIDTH
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [false; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [false; CHIP8_DISPLAY_WIDTH * CHIP8_DISPLAY_HEIGHT];
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[translate(x, y)]
    }

    /// XORs an 8 pixel wide sprite onto the display with its top left corner at
    /// (`x`, `y`). Each byte of `rows` is one row, most significant bit leftmost.
    /// Returns true if any pixel was switched from on to off.
    pub fn draw_sprite(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let mut collision = false;
        for (y_pos, row) in rows.iter().enumerate() {
            for x_pos in 0..8usize {
                if row & (0x80u8 >> x_pos) == 0 {
                    continue;
                }
                let pixel = &mut self.pixels[translate(x + x_pos, y + y_pos)];
                collision |= *pixel;
                *pixel ^= true;
            }
        }
        collision
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.pixels
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        FrameBuffer::new()
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.pixels.chunks(CHIP8_DISPLAY_WIDTH) {
            let line: String = row.iter().map(|&on| if on { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
