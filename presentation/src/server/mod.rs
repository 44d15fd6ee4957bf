//! HTTP front end
//!
//! - `POST /chat`  : `{"question": "..."}` -> `{"response": "..."}`
//! - `GET  /health`: liveness probe

mod error;
mod routes;

pub use error::ServerError;
pub use routes::{ChatRequest, ChatResponse, ChatServerState, app_router};
