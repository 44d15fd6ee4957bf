//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod render_error;
pub mod route_question;
