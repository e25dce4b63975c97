//! Application layer: use cases built on settings and domain types

pub mod error;
pub mod status;

pub use error::{ApplicationError, ApplicationResult};
pub use status::{open_session, SessionState, StatusReport};
