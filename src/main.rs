//! # CBSH
//!
//! Commodore BASIC shell. Interactive without arguments,
//! otherwise runs the program file named by the first argument.
//!

fn main() {
    cbsh::term::main();
}
