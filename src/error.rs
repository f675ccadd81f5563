//! Error types for wallet discovery and connection.
//!
//! This module defines the connection error taxonomy used throughout the
//! crate. Discovery and selection never fail (absence is an empty result or
//! `None`); only the connection handshake raises, and it raises exactly one
//! error per failed invocation.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use wallet_discovery::{Connector, Result};
//!
//! async fn example(connector: &Connector) -> Result<()> {
//!     let session = connector.connect_metamask_wallet().await?;
//!     println!("connected as {}", session.accounts[0]);
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Selection | [`Error::NotFound`] |
//! | Provider | [`Error::AlreadyPending`], [`Error::UserRejected`] |
//! | Fallback | [`Error::Unknown`] |
//!
//! Every variant carries (or is) a human-readable message suitable for
//! direct display; callers are expected to show it as-is.

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

use crate::provider::RpcError;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Connection error taxonomy.
///
/// Constructed by the connection handshake from EIP-1193 provider errors;
/// never retained by the crate after being returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No eligible MetaMask provider after discovery and selection.
    #[error(
        "MetaMask provider not found. If you have multiple wallets, disable others or open MetaMask."
    )]
    NotFound,

    /// The provider reports an outstanding connection request (code -32002).
    ///
    /// The user must resolve the pending popup before retrying.
    #[error(
        "A connection request is already pending in MetaMask. Please open the extension and complete it."
    )]
    AlreadyPending,

    /// The user declined the request in the provider UI (code 4001).
    #[error("Request rejected in MetaMask.")]
    UserRejected,

    /// Any other provider failure.
    ///
    /// Carries the provider-supplied message verbatim when one exists.
    #[error("{message}")]
    Unknown {
        /// Human-readable failure description.
        message: String,
    },
}

// ============================================================================
// Error Constructors
// ============================================================================

/// Fallback message when the provider supplies none.
const FALLBACK_MESSAGE: &str = "Failed to connect wallet.";

impl Error {
    /// Creates an unknown error with the given message.
    #[inline]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Translates an EIP-1193 provider error into the crate taxonomy.
    ///
    /// | Provider code | Variant |
    /// |---------------|---------|
    /// | `-32002` | [`Error::AlreadyPending`] |
    /// | `4001` | [`Error::UserRejected`] |
    /// | other / missing | [`Error::Unknown`] with the provider message, or a generic fallback |
    #[must_use]
    pub fn from_rpc(err: RpcError) -> Self {
        match err.code {
            Some(-32002) => Self::AlreadyPending,
            Some(4001) => Self::UserRejected,
            _ => Self::Unknown {
                message: err.message.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
            },
        }
    }
}

impl From<RpcError> for Error {
    fn from(err: RpcError) -> Self {
        Self::from_rpc(err)
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if re-invoking after user action may succeed.
    ///
    /// `AlreadyPending` and `UserRejected` both resolve once the user acts
    /// in the MetaMask popup; `NotFound` requires installing or enabling
    /// the extension first.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AlreadyPending | Self::UserRejected)
    }

    /// Returns `true` if the failure was a user decision rather than a
    /// provider or environment fault.
    #[inline]
    #[must_use]
    pub fn is_user_decision(&self) -> bool {
        matches!(self, Self::UserRejected)
    }
}

// ============================================================================
// Tests
// ============================================================================
