//! # Nga
//!
//! A minimal dual-stack virtual machine. Thirty opcodes, packed four to
//! a cell, run out of one flat memory that also holds the dictionary of
//! named words. The whole memory loads from and saves to an image file.
//!
//! ```
//! use nga::mach::{packed, Config, Opcode, Runtime};
//!
//! let mut runtime = Runtime::new(Config::default().with_memory_size(4096)).unwrap();
//! let program = [
//!     packed::pack([Opcode::Lit, Opcode::Dup, Opcode::Add, Opcode::Halt]),
//!     21,
//! ];
//! for (at, cell) in program.iter().enumerate() {
//!     runtime.memory_mut().set(100 + at as i32, *cell).unwrap();
//! }
//! runtime.execute(100).unwrap();
//! assert_eq!(runtime.data().as_slice(), &[42]);
//! ```
//!
//! Executing is the job of [`mach::Runtime`]. Typed input reaches the
//! image through [`mach::Runtime::evaluate`], which hands each word to the
//! image's own `interpret` word.

pub mod lang;
pub mod mach;
