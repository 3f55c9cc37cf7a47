use super::{Address, Cell};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Flat cell memory
///
/// Code, the dictionary, and working data share this one array.
/// Addresses are cells as the machine sees them; anything outside
/// `0..len()` is an `AddressOutOfRange` error, never a wild access.

pub struct Memory {
    cells: Vec<Cell>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Memory {{ {} cells }}", self.cells.len())
    }
}

impl Memory {
    pub fn new(len: Address) -> Memory {
        Memory {
            cells: vec![0; len],
        }
    }
    pub fn len(&self) -> Address {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = 0;
        }
    }
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }
    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn index(&self, addr: Cell) -> Result<Address> {
        if addr >= 0 && (addr as Address) < self.cells.len() {
            Ok(addr as Address)
        } else {
            Err(error!(AddressOutOfRange; &addr.to_string()))
        }
    }

    pub fn get(&self, addr: Cell) -> Result<Cell> {
        let index = self.index(addr)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, addr: Cell, val: Cell) -> Result<()> {
        let index = self.index(addr)?;
        self.cells[index] = val;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_get_set() {
        let mut m = Memory::new(8);
        m.set(7, -3).unwrap();
        assert_eq!(m.get(7).unwrap(), -3);
        assert_eq!(m.get(0).unwrap(), 0);
    }

    #[test]
    fn test_out_of_range() {
        let mut m = Memory::new(8);
        assert_eq!(m.get(8).unwrap_err().code(), ErrorCode::AddressOutOfRange);
        assert_eq!(m.set(-1, 0).unwrap_err().code(), ErrorCode::AddressOutOfRange);
    }
}
