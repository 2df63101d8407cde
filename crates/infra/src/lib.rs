//! Infrastructure layer: account store implementations.
//!
//! The production deployment backs [`curio_accounts::store::UserStore`]
//! with a document database; this crate ships the in-memory
//! implementation used by tests, local development, and the API
//! black-box suite.

pub mod user_store;


pub use user_store::InMemoryUserStore;
