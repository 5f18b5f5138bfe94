//! Core traits module
//!
//! Contains the storage and session abstractions the engine depends on.

pub mod store;

pub use store::*;
