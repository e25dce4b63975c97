//! Infrastructure layer: process environment access

pub mod env;

pub use env::{lookup, resolve};
