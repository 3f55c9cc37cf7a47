use super::Cell;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Cell arithmetic
///
/// `lhs` is the deeper stack item, `rhs` the top. Results wrap at
/// the cell width; nothing here traps except division by zero.

pub struct Operation {}

impl Operation {
    pub fn flag(b: bool) -> Cell {
        if b {
            -1
        } else {
            0
        }
    }

    pub fn equal(lhs: Cell, rhs: Cell) -> Cell {
        Operation::flag(lhs == rhs)
    }

    pub fn not_equal(lhs: Cell, rhs: Cell) -> Cell {
        Operation::flag(lhs != rhs)
    }

    pub fn less(lhs: Cell, rhs: Cell) -> Cell {
        Operation::flag(lhs < rhs)
    }

    pub fn greater(lhs: Cell, rhs: Cell) -> Cell {
        Operation::flag(lhs > rhs)
    }

    pub fn sum(lhs: Cell, rhs: Cell) -> Cell {
        lhs.wrapping_add(rhs)
    }

    pub fn subtract(lhs: Cell, rhs: Cell) -> Cell {
        lhs.wrapping_sub(rhs)
    }

    pub fn multiply(lhs: Cell, rhs: Cell) -> Cell {
        lhs.wrapping_mul(rhs)
    }

    /// Truncating division. Returns `(remainder, quotient)`, the order
    /// they are pushed.
    pub fn divide(lhs: Cell, rhs: Cell) -> Result<(Cell, Cell)> {
        if rhs == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok((lhs.wrapping_rem(rhs), lhs.wrapping_div(rhs)))
    }

    /// Negative `rhs` shifts left by its magnitude; otherwise an
    /// arithmetic right shift. Distances past the cell width saturate.
    pub fn shift(lhs: Cell, rhs: Cell) -> Cell {
        let bits = Cell::max_value().count_ones() + 1;
        if rhs < 0 {
            let n = rhs.unsigned_abs();
            if n >= bits {
                0
            } else {
                lhs.wrapping_shl(n)
            }
        } else {
            let n = rhs as u32;
            if n >= bits {
                if lhs < 0 {
                    -1
                } else {
                    0
                }
            } else {
                lhs >> n
            }
        }
    }
}
