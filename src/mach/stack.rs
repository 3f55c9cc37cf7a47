use super::Cell;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited cells
///
/// Storage is allocated once. Dropped slots are zeroed so a dump of
/// the stack matches what the reference machines leave behind.

pub struct Stack {
    name: &'static str,
    cells: Vec<Cell>,
    depth: usize,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_slice())
    }
}

impl Stack {
    pub fn new(name: &'static str, capacity: usize) -> Stack {
        Stack {
            name,
            cells: vec![0; capacity],
            depth: 0,
        }
    }
    fn overflow_error(&self) -> Error {
        error!(StackOverflow; self.name)
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow; self.name)
    }
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }
    pub fn depth(&self) -> usize {
        self.depth
    }
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }
    pub fn is_full(&self) -> bool {
        self.depth == self.cells.len()
    }
    /// Live cells, bottom first.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells[..self.depth]
    }
    pub fn clear(&mut self) {
        for cell in &mut self.cells[..self.depth] {
            *cell = 0;
        }
        self.depth = 0;
    }
    pub fn push(&mut self, val: Cell) -> Result<()> {
        if self.is_full() {
            return Err(self.overflow_error());
        }
        self.cells[self.depth] = val;
        self.depth += 1;
        Ok(())
    }
    pub fn pop(&mut self) -> Result<Cell> {
        let val = self.top()?;
        self.depth -= 1;
        self.cells[self.depth] = 0;
        Ok(val)
    }
    pub fn drop(&mut self) -> Result<()> {
        self.pop().map(|_| ())
    }
    /// Pops two cells, returning them in push order: `(second, top)`.
    pub fn pop_2(&mut self) -> Result<(Cell, Cell)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    pub fn top(&self) -> Result<Cell> {
        match self.depth {
            0 => Err(self.underflow_error()),
            n => Ok(self.cells[n - 1]),
        }
    }
    pub fn second(&self) -> Result<Cell> {
        match self.depth {
            0 | 1 => Err(self.underflow_error()),
            n => Ok(self.cells[n - 2]),
        }
    }
    pub fn swap(&mut self) -> Result<()> {
        if self.depth < 2 {
            return Err(self.underflow_error());
        }
        self.cells.swap(self.depth - 1, self.depth - 2);
        Ok(())
    }
}
