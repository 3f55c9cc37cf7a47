/*!
## Rust Machine Module

This Rust module is the Nga virtual machine: a dual-stack MISC processor
executing packed opcodes out of one flat array of cells.

*/

/// One machine word. Images store these as 4-byte native-order integers.
pub type Cell = i32;
pub type Address = usize;

mod bridge;
mod config;
mod dictionary;
mod image;
mod memory;
mod opcode;
mod operation;
mod runtime;
mod stack;

pub mod packed;

pub use config::Config;
pub use dictionary::Dictionary;
pub use dictionary::Entries;
pub use dictionary::Entry;
pub use memory::Memory;
pub use opcode::Opcode;
pub use operation::Operation;
pub use runtime::Runtime;
pub use runtime::{INTERPRET, NOT_FOUND};
pub use stack::Stack;

#[cfg(test)]
mod tests;
