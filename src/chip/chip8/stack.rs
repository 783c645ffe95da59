use ux::u12;

use crate::chip::{chip8::constants::CHIP8_STACK_DEPTH, Chip8Error};

/// A fixed capacity stack of return addresses. Note that there are no instructions
/// allowing to modify the stack directly, it only backs CALL and RETURN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStack {
    entries: [u12; CHIP8_STACK_DEPTH],
    /// Number of occupied entries, i.e. the index of the next free slot.
    stack_pointer: usize,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            entries: [u12::new(0); CHIP8_STACK_DEPTH],
            stack_pointer: 0,
        }
    }

    /// Pushes a return address. `caller` is only used for error reporting.
    pub fn push(&mut self, return_address: u12, caller: u12) -> Result<(), Chip8Error> {
        if self.stack_pointer == CHIP8_STACK_DEPTH {
            return Err(Chip8Error::StackOverflow {
                address: u16::from(caller),
                capacity: CHIP8_STACK_DEPTH,
            });
        }
        self.entries[self.stack_pointer] = return_address;
        self.stack_pointer += 1;
        Ok(())
    }

    pub fn pop(&mut self, caller: u12) -> Result<u12, Chip8Error> {
        if self.stack_pointer == 0 {
            return Err(Chip8Error::StackUnderflow {
                address: u16::from(caller),
            });
        }
        self.stack_pointer -= 1;
        Ok(self.entries[self.stack_pointer])
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack_pointer
    }

    #[cfg(test)]
    pub fn peek(&self) -> Option<u12> {
        self.stack_pointer
            .checked_sub(1)
            .map(|top| self.entries[top])
    }
}

impl Default for CallStack {
    fn default() -> Self {
        CallStack::new()
    }
}
