//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `access_validators`: access-control and logging validators
//! - `storage_validators`: storage validators
//! - `tests`: test suite for all validators

mod access_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
