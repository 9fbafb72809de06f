//! Unified error types for Habitude.
//!
//! Every fallible operation in the crate returns [`Result`], and the HTTP
//! layer maps each variant to a status code. Ownership failures are folded
//! into the not-found variants so callers cannot distinguish "does not
//! exist" from "belongs to someone else".

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The request carried no token, or the token resolved to no user.
    #[error("not authenticated")]
    Unauthenticated,

    /// The check-in does not exist or is not owned by the requesting user.
    #[error("check-in {id} not found")]
    CheckinNotFound {
        /// ID the caller asked for
        id: i64,
    },

    /// The todo does not exist or is not owned by the requesting user.
    #[error("todo {id} not found")]
    TodoNotFound {
        /// ID the caller asked for
        id: i64,
    },

    /// The user has not checked in today.
    #[error("no check-in found for today")]
    NoCheckinToday,

    /// The user has not written a journal entry today.
    #[error("no journal entry found for today")]
    NoJournalEntryToday,

    /// The input was rejected; the caller must correct it and resubmit.
    #[error("{message}")]
    Validation {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// Configuration error (bad environment variable, unparsable setting).
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of the bad setting
        message: String,
    },

    /// Underlying persistence call failed.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Stored or submitted JSON could not be encoded/decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (socket binding, serving).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
