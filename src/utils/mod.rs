//! Utility modules
//!
//! - **error**: error taxonomy and user-facing translation
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{AccessError, ErrorKind, Result};
