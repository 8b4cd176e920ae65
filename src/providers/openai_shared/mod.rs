//! Shared OpenAI-compatible API structures and utilities
//!
//! - `types` - Request/response wire structures
//! - `utils` - HTTP client for the chat completions endpoint

pub mod types;
pub mod utils;

pub use types::*;
pub use utils::*;
