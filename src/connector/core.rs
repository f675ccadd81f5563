//! Wallet connector coordinator.
//!
//! The [`Connector`] struct is the central facade: it owns the injected
//! platform bindings and exposes the three public operations of the crate.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use wallet_discovery::{Connector, MemoryBus};
//!
//! # async fn example() -> wallet_discovery::Result<()> {
//! let connector = Connector::builder()
//!     .bus(Arc::new(MemoryBus::new()))
//!     .build();
//!
//! let session = connector.connect_metamask_wallet().await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::discovery::selection::select_metamask;
use crate::discovery::DiscoveryEngine;
use crate::error::Result;
use crate::platform::{LegacySlot, SignalBus};
use crate::provider::{DiscoveredWallet, ProviderHandle};

use super::builder::ConnectorBuilder;
use super::handshake::{self, ConnectionResult};

// ============================================================================
// Connector
// ============================================================================

/// Wallet discovery and connection facade.
///
/// The connector is responsible for:
/// - Running dual-protocol discovery over the injected bindings
/// - Selecting the MetaMask provider among the candidates
/// - Driving the connection handshake
///
/// It holds no session state: a successful [`ConnectionResult`] is owned by
/// the caller, and the connector retains no reference to it.
#[derive(Clone)]
pub struct Connector {
    engine: Arc<DiscoveryEngine>,
    announce_window: Duration,
}

impl fmt::Debug for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("announce_window", &self.announce_window)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Connector - Public API
// ============================================================================

impl Connector {
    /// Creates a configuration builder for the connector.
    #[inline]
    #[must_use]
    pub fn builder() -> ConnectorBuilder {
        ConnectorBuilder::new()
    }

    /// Creates a connector directly from its bindings.
    #[inline]
    #[must_use]
    pub fn new(
        bus: Arc<dyn SignalBus>,
        legacy: Arc<dyn LegacySlot>,
        announce_window: Duration,
    ) -> Self {
        Self {
            engine: Arc::new(DiscoveryEngine::new(bus, legacy)),
            announce_window,
        }
    }

    /// The announce window used when a caller does not pass one.
    #[inline]
    #[must_use]
    pub fn announce_window(&self) -> Duration {
        self.announce_window
    }

    /// Discovers injected wallet providers.
    ///
    /// `window` overrides the configured passive announce window for this
    /// call only. Never fails; an empty page yields an empty list.
    pub async fn discover_providers(&self, window: Option<Duration>) -> Vec<DiscoveredWallet> {
        self.engine
            .discover(window.unwrap_or(self.announce_window))
            .await
    }

    /// Discovers providers and picks the MetaMask one, if present.
    ///
    /// Runs a fresh discovery with the configured window on every call.
    /// Never fails; absence is `None`.
    pub async fn get_metamask_provider(&self) -> Option<ProviderHandle> {
        let wallets = self.engine.discover(self.announce_window).await;
        select_metamask(&wallets)
    }

    /// Connects to MetaMask: discovery, selection, then the account and
    /// chain-id handshake.
    ///
    /// Single-shot: no retries are performed. Callers re-invoke after the
    /// user resolves a pending popup or rejection.
    ///
    /// The underlying `eth_requestAccounts` call is expected to originate
    /// from a user-initiated gesture; providers that enforce this will fail
    /// the request otherwise, which surfaces here as a translated error.
    ///
    /// # Errors
    ///
    /// Exactly one per failed invocation:
    ///
    /// - [`Error::NotFound`](crate::Error::NotFound) if no eligible provider
    ///   exists after discovery and selection
    /// - [`Error::AlreadyPending`](crate::Error::AlreadyPending) if the
    ///   provider reports an outstanding request
    /// - [`Error::UserRejected`](crate::Error::UserRejected) if the user
    ///   declined in the provider UI
    /// - [`Error::Unknown`](crate::Error::Unknown) for anything else
    pub async fn connect_metamask_wallet(&self) -> Result<ConnectionResult> {
        handshake::run(&self.engine, self.announce_window).await
    }
}
