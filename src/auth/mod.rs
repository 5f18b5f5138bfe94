//! Authorization
//!
//! Validated session claims and the role/capability engine.

pub mod claims;
pub mod rbac;

pub use claims::{ActorClaims, RawClaims};
