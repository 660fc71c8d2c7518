#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate num_derive;

#[macro_use]
extern crate tracing;

pub mod context;
pub mod dump;
pub mod error;
pub mod instruction;
pub mod lexer;
pub mod memory;
pub mod parser;
pub mod program;
pub mod variables;

pub use context::{run, Emulator, Execution, RunOutcome};
pub use dump::DEFAULT_DUMP;
pub use error::{EmulatorError, ErrorKind};
