//! # BASIC
//!
//! Runs a BASIC program file from the command line.
//!

mod term;

fn main() {
    term::main()
}
