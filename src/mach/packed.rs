//! Packed-instruction codec.
//!
//! A cell carries four 8-bit opcode fields, least significant byte first.
//! The field order is fixed by the arithmetic, not by host byte order.

use super::{Cell, Opcode};

pub fn unpack(cell: Cell) -> [u8; 4] {
    [
        (cell & 0xFF) as u8,
        ((cell >> 8) & 0xFF) as u8,
        ((cell >> 16) & 0xFF) as u8,
        ((cell >> 24) & 0xFF) as u8,
    ]
}

/// True when every field names a real opcode. Cells that fail are
/// executed as one unpacked opcode instead.
pub fn validate(cell: Cell) -> bool {
    unpack(cell)
        .iter()
        .all(|&byte| (byte as usize) < Opcode::COUNT)
}

pub fn decode(cell: Cell) -> Option<[Opcode; 4]> {
    let bytes = unpack(cell);
    Some([
        Opcode::from_byte(bytes[0])?,
        Opcode::from_byte(bytes[1])?,
        Opcode::from_byte(bytes[2])?,
        Opcode::from_byte(bytes[3])?,
    ])
}

pub fn pack(ops: [Opcode; 4]) -> Cell {
    Cell::from_le_bytes([ops[0] as u8, ops[1] as u8, ops[2] as u8, ops[3] as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::Opcode::*;

    #[test]
    fn test_low_byte_first() {
        let cell = pack([Dup, Add, Drop, Nop]);
        assert_eq!(cell, 0x00_03_11_02);
        assert_eq!(unpack(cell), [2, 17, 3, 0]);
        assert_eq!(decode(cell), Some([Dup, Add, Drop, Nop]));
    }

    #[test]
    fn test_validate() {
        assert!(validate(0));
        assert!(validate(pack([IoInteract, IoInteract, IoInteract, IoInteract])));
        assert!(!validate(30));
        assert!(!validate(30 << 24));
        assert!(!validate(-1));
        assert_eq!(decode(1000), None);
    }
}
