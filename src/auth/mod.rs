//! Authentication module for session state and credential verification.
//!
//! This module provides:
//! - `Session`: the in-memory authentication flag with best-effort persistence
//! - `CredentialVerifier`: pluggable credential checking
//! - `StaticCredentials`: the compiled-in demo account
//!
//! A session persists a single boolean across restarts; there are no tokens,
//! no expiry, and no identity beyond "signed in".

pub mod credentials;
pub mod session;

pub use credentials::{StaticCredentials, DEMO_PASSWORD, DEMO_USERNAME};
pub use session::Session;
