//! Error types for the social graph.
//!
//! Every fallible operation reports one of these kinds synchronously.
//! None is fatal, and no operation leaves a partial mutation behind on
//! failure.

use thiserror::Error;

/// Errors reported by registry and store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SocialError {
    /// The person code is already registered.
    #[error("person code already registered: {0}")]
    DuplicateIdentity(String),

    /// No person is registered under the given code.
    #[error("no person registered under code: {0}")]
    UnknownIdentity(String),

    /// A group with the given name already exists.
    #[error("group name already exists: {0}")]
    DuplicateGroup(String),

    /// No group exists with the given name.
    #[error("no group named: {0}")]
    UnknownGroup(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SocialError>;
