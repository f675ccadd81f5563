//! Connection handshake state machine.
//!
//! Drives a selected provider through account and chain-id retrieval:
//!
//! ```text
//! Idle → Discovering → Selecting → RequestingAccounts → RequestingChain → Connected
//!                          │               │                   │
//!                          └───────────────┴───────────────────┴──→ Errored
//! ```
//!
//! Provider-level failures in the two request phases are translated into
//! the crate error taxonomy ([`Error::from_rpc`]); selection failure yields
//! [`Error::NotFound`]. Single-shot: one invocation performs each request
//! at most once and raises at most one error.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::discovery::selection::select_metamask;
use crate::discovery::DiscoveryEngine;
use crate::error::{Error, Result};
use crate::provider::{ProviderHandle, RpcCall};

// ============================================================================
// ConnectPhase
// ============================================================================

/// Phase of one connection handshake invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectPhase {
    /// Not yet started.
    Idle,
    /// Running dual-protocol discovery.
    Discovering,
    /// Applying the MetaMask selection heuristic.
    Selecting,
    /// `eth_requestAccounts` in flight.
    RequestingAccounts,
    /// `eth_chainId` in flight.
    RequestingChain,
    /// Handshake complete.
    Connected,
    /// Handshake failed; a translated error was raised.
    Errored,
}

impl fmt::Display for ConnectPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Discovering => "discovering",
            Self::Selecting => "selecting",
            Self::RequestingAccounts => "requesting-accounts",
            Self::RequestingChain => "requesting-chain",
            Self::Connected => "connected",
            Self::Errored => "errored",
        };
        f.write_str(name)
    }
}

// ============================================================================
// ConnectionResult
// ============================================================================

/// A connected account/chain session.
///
/// Constructed once per successful handshake and owned by the caller
/// thereafter; the crate retains no reference.
#[derive(Debug, Clone)]
pub struct ConnectionResult {
    /// The connected provider.
    pub provider: ProviderHandle,
    /// Authorized accounts; the first entry is the active account by
    /// protocol convention.
    pub accounts: Vec<String>,
    /// Hex-encoded chain identifier (e.g. `0x1`).
    pub chain_id: String,
}

impl ConnectionResult {
    /// The active account, if the provider authorized any.
    #[inline]
    #[must_use]
    pub fn active_account(&self) -> Option<&str> {
        self.accounts.first().map(String::as_str)
    }
}

// ============================================================================
// Handshake
// ============================================================================

/// Phase tracker for one handshake invocation.
struct Handshake {
    phase: ConnectPhase,
}

impl Handshake {
    fn new() -> Self {
        Self {
            phase: ConnectPhase::Idle,
        }
    }

    fn transition(&mut self, next: ConnectPhase) {
        debug!(from = %self.phase, to = %next, "handshake phase");
        self.phase = next;
    }

    fn fail(&mut self, err: Error) -> Error {
        self.transition(ConnectPhase::Errored);
        debug!(error = %err, "handshake failed");
        err
    }
}

// ============================================================================
// Handshake Execution
// ============================================================================

/// Runs one connection handshake over the given engine.
pub(crate) async fn run(
    engine: &DiscoveryEngine,
    announce_window: Duration,
) -> Result<ConnectionResult> {
    let mut handshake = Handshake::new();

    handshake.transition(ConnectPhase::Discovering);
    let wallets = engine.discover(announce_window).await;

    handshake.transition(ConnectPhase::Selecting);
    let Some(provider) = select_metamask(&wallets) else {
        return Err(handshake.fail(Error::NotFound));
    };

    handshake.transition(ConnectPhase::RequestingAccounts);
    let accounts = match provider.request(RpcCall::request_accounts()).await {
        Ok(value) => match parse_accounts(value) {
            Ok(accounts) => accounts,
            Err(err) => return Err(handshake.fail(err)),
        },
        Err(err) => return Err(handshake.fail(err.into())),
    };

    handshake.transition(ConnectPhase::RequestingChain);
    let chain_id = match provider.request(RpcCall::chain_id()).await {
        Ok(value) => match parse_chain_id(value) {
            Ok(chain_id) => chain_id,
            Err(err) => return Err(handshake.fail(err)),
        },
        Err(err) => return Err(handshake.fail(err.into())),
    };

    handshake.transition(ConnectPhase::Connected);
    debug!(accounts = accounts.len(), %chain_id, "wallet connected");

    Ok(ConnectionResult {
        provider,
        accounts,
        chain_id,
    })
}

// ============================================================================
// Result Parsing
// ============================================================================

/// Parses an `eth_requestAccounts` result: an ordered array of address
/// strings.
fn parse_accounts(value: Value) -> Result<Vec<String>> {
    serde_json::from_value(value)
        .map_err(|_| Error::unknown("Malformed eth_requestAccounts response from provider."))
}

/// Parses an `eth_chainId` result: a hex-encoded chain id string.
fn parse_chain_id(value: Value) -> Result<String> {
    match value {
        Value::String(chain_id) => Ok(chain_id),
        _ => Err(Error::unknown(
            "Malformed eth_chainId response from provider.",
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
