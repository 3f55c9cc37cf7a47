//! String Bridge: zero terminated strings of one character per cell.

use super::{Cell, Memory};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

impl Memory {
    /// Read characters upward from `addr` until a zero cell.
    pub fn extract(&self, addr: Cell) -> Result<String> {
        let mut s = String::new();
        let mut at = addr;
        loop {
            match self.get(at)? {
                0 => return Ok(s),
                c => s.push(c as u8 as char),
            }
            at = at.wrapping_add(1);
        }
    }

    /// Write `s` from `addr` upward, followed by a zero cell.
    pub fn inject(&mut self, s: &str, addr: Cell) -> Result<()> {
        let mut at = addr;
        for byte in s.bytes() {
            self.set(at, byte as Cell)?;
            at = at.wrapping_add(1);
        }
        self.set(at, 0)
    }
}
