//! # BASIC
//!
//! A line-oriented BASIC interpreter. Programs are plain text files made of
//! labeled lines, typed variables and single-line `IF`, run straight from
//! their tokens.
//!
//! ```text
//! basic game.bas
//! basic --seed 42 game.bas
//! ```
//!
//! The library is usable on its own. Give a [`mach::Runtime`] any
//! input and output streams, load a program and run it.
//!
//! ```
//! use basic::mach::Runtime;
//! let mut runtime = Runtime::new(&b"5\n"[..], Vec::new());
//! runtime.load(&b"INPUT N%\nPRINT N% * N%"[..]).unwrap();
//! runtime.run().unwrap();
//! assert_eq!(runtime.output(), b"25 \n");
//! ```

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

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
