//! The provider capability contract.
//!
//! Every injected wallet, however discovered, is programmed against through
//! [`WalletProvider`]: an asynchronous request operation keyed by method
//! name, plus optional self-declared flags, an optional sub-provider list
//! (multiplexed wallets sharing one injection point), and an optional
//! wallet event stream. The crate ships no implementation of this trait;
//! platform glue (or a test fake) supplies one per injected provider.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::result::Result as StdResult;

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ProviderHandle;

// ============================================================================
// Types
// ============================================================================

/// Stream of wallet-side events from a provider.
pub type ProviderEventStream = BoxStream<'static, ProviderEvent>;

// ============================================================================
// WalletProvider
// ============================================================================

/// Capability contract for one injected wallet provider.
///
/// # Contract
///
/// - [`request`](Self::request) is the only required operation: a uniform
///   asynchronous call taking a method name and optional parameters,
///   returning a method-specific JSON result.
/// - [`flags`](Self::flags) reports self-declared identity flags. These are
///   spoofable and only trusted as a legacy fallback (see the selection
///   heuristic).
/// - [`sub_providers`](Self::sub_providers) exposes the sub-provider list of
///   a multiplexed wallet; empty for ordinary providers.
/// - [`subscribe_events`](Self::subscribe_events) is an optional wallet
///   event feed. The discovery/connection core never consumes it; it exists
///   for callers that hold a connected handle.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Issues an asynchronous request against the provider.
    ///
    /// # Errors
    ///
    /// Returns the provider's own [`RpcError`] untranslated; the connection
    /// handshake maps it into the crate taxonomy.
    async fn request(&self, call: RpcCall) -> StdResult<Value, RpcError>;

    /// Self-declared identity flags.
    fn flags(&self) -> ProviderFlags {
        ProviderFlags::default()
    }

    /// Sub-provider list of a multiplexed injection point.
    ///
    /// Empty means this provider stands alone.
    fn sub_providers(&self) -> Vec<ProviderHandle> {
        Vec::new()
    }

    /// Subscribes to wallet-side events, if the provider supports them.
    fn subscribe_events(&self) -> Option<ProviderEventStream> {
        None
    }
}

// ============================================================================
// RpcCall
// ============================================================================

/// A single provider request: method name plus optional parameters.
#[derive(Debug, Clone, Serialize)]
pub struct RpcCall {
    /// Method name (e.g. `eth_requestAccounts`).
    pub method: String,

    /// Method-specific parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcCall {
    /// Account retrieval method. Providers typically require an active
    /// user-initiated gesture before honoring it.
    pub const ETH_REQUEST_ACCOUNTS: &'static str = "eth_requestAccounts";

    /// Chain id retrieval method. Returns a hex-encoded chain identifier.
    pub const ETH_CHAIN_ID: &'static str = "eth_chainId";

    /// Creates a parameterless call.
    #[inline]
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }

    /// Creates a call with parameters.
    #[inline]
    #[must_use]
    pub fn with_params(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params: Some(params),
        }
    }

    /// Creates an `eth_requestAccounts` call.
    #[inline]
    #[must_use]
    pub fn request_accounts() -> Self {
        Self::new(Self::ETH_REQUEST_ACCOUNTS)
    }

    /// Creates an `eth_chainId` call.
    #[inline]
    #[must_use]
    pub fn chain_id() -> Self {
        Self::new(Self::ETH_CHAIN_ID)
    }
}

// ============================================================================
// RpcError
// ============================================================================

/// Provider-level request failure, as surfaced by the wallet.
///
/// Both fields are optional: real-world providers omit either freely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcError {
    /// EIP-1193 / JSON-RPC error code.
    #[serde(default)]
    pub code: Option<i64>,

    /// Provider-supplied message.
    #[serde(default)]
    pub message: Option<String>,
}

impl RpcError {
    /// Creates an error from optional code and message.
    #[inline]
    #[must_use]
    pub fn new(code: Option<i64>, message: Option<String>) -> Self {
        Self { code, message }
    }

    /// Creates an error carrying only a code.
    #[inline]
    #[must_use]
    pub fn with_code(code: i64) -> Self {
        Self {
            code: Some(code),
            message: None,
        }
    }

    /// Creates an error carrying only a message.
    #[inline]
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: Some(message.into()),
        }
    }

    /// Standard JSON-RPC "method not found" error for an unsupported method.
    #[inline]
    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: Some(-32601),
            message: Some(format!("The method {method} does not exist")),
        }
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "provider error {code}: {message}"),
            (Some(code), None) => write!(f, "provider error {code}"),
            (None, Some(message)) => write!(f, "provider error: {message}"),
            (None, None) => write!(f, "provider error"),
        }
    }
}

impl std::error::Error for RpcError {}

// ============================================================================
// ProviderFlags
// ============================================================================

/// Self-declared identity flags on a provider.
///
/// Mirrors the legacy `isMetaMask` / `isPhantom` booleans. Absent flags are
/// `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderFlags {
    /// The provider claims to be MetaMask.
    pub is_metamask: bool,
    /// The provider claims to be Phantom.
    pub is_phantom: bool,
}

impl ProviderFlags {
    /// Flags of a provider that declares MetaMask identity only.
    #[inline]
    #[must_use]
    pub const fn metamask() -> Self {
        Self {
            is_metamask: true,
            is_phantom: false,
        }
    }

    /// Returns `true` if the provider claims MetaMask without also claiming
    /// Phantom.
    ///
    /// Phantom sets `isMetaMask` while being a different product; the extra
    /// check guards against that impersonation.
    #[inline]
    #[must_use]
    pub const fn claims_metamask_exclusively(&self) -> bool {
        self.is_metamask && !self.is_phantom
    }
}

// ============================================================================
// ProviderEvent
// ============================================================================

/// Wallet-side events a provider may emit after connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// Account list changed; first entry is the new active account.
    AccountsChanged(Vec<String>),
    /// Active chain changed to the given hex chain id.
    ChainChanged(String),
    /// Provider disconnected from the chain.
    Disconnect,
}

// ============================================================================
// Tests
// ============================================================================
