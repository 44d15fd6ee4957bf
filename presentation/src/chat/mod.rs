//! Interactive chat module
//!
//! Provides a readline-based interactive prompt over the response router.

mod input;
mod repl;

pub use input::ReplInput;
pub use repl::ChatRepl;
