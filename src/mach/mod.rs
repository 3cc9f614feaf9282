/*!
## Rust Machine Module

This Rust module loads and runs BASIC programs. Each logical line is
interpreted straight from its tokens; expressions are evaluated as they
are scanned.

*/

mod eval;
mod function;
mod input;
mod link;
mod operation;
mod program;
mod runtime;
mod shape;
mod stack;
mod val;
mod var;

pub use eval::evaluate;
pub use function::Function;
pub use input::InputStream;
pub use link::Link;
pub use operation::Operation;
pub use program::Program;
pub use runtime::{raise_interrupt, Runtime};
pub use stack::Stack;
pub use val::{format_real, Type, Val};
pub use var::Var;
