//! `curio-core` — shared foundation for the account service.
//!
//! This crate contains **pure domain** primitives (no transport or
//! storage concerns).

pub mod error;

pub use error::{ServiceError, ServiceResult};
