//! # Nga
//!
//! Terminal host for the Nga virtual machine. Loads `ngaImage` from
//! the current directory and feeds it one word of input at a time.
//!

mod term;

fn main() {
    term::main();
}
