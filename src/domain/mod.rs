//! Domain layer: credentials and session types
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod mask;
pub mod secret;
pub mod session;

pub use error::DomainError;
pub use mask::{mask, NOT_SET, REDACTED};
pub use secret::ApiKey;
pub use session::Session;
