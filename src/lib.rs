//! # CBSH
//!
//! A Commodore BASIC shell: line-numbered BASIC with GOTO, GOSUB and
//! FOR/NEXT, plus a few commands for working with the host system.
//!
//! Build with [Rust](https://www.rust-lang.org/tools/install) then run
//! `cargo install --path .` from the source directory.
//!
//! Begin by opening a terminal and running `cbsh`. If you get the
//! following, you have achieved success.
//! ```text
//! CBSH - Commodore BASIC Shell, version 1.0
//!
//! READY.
//! > █
//! ```
//!
//! A program file can be run directly with `cbsh program.bas`.
//! Start the file with `#!/usr/bin/env cbsh` to make it executable.
//!
//! Set `RUST_LOG=cbsh=trace` to see every statement as it executes.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod lang;
pub mod mach;
pub mod term;
