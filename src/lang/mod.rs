/*!
# Rust Language Module

This Rust module holds what the Nga host needs around the machine:
error reporting and splitting typed input into words.

*/

#[macro_use]
mod error;
mod word;

pub use error::Error;
pub use error::ErrorCode;
pub use word::words;
