mod capability_ops;
mod connection;
mod override_ops;
mod session_ops;
mod subscription_ops;
mod types;

pub use types::{DatabaseBackendType, SeaOrmDatabase, SeedReport};
