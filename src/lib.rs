//! Wallet Discovery - EVM wallet provider discovery and connection.
//!
//! This library lets an application discover wallet providers injected into
//! a page and negotiate a single account/chain session with MetaMask.
//!
//! # Architecture
//!
//! Discovery runs a dual protocol against injectable platform bindings:
//!
//! - **Announcement channel**: broadcast a request signal, collect announce
//!   signals for a fixed passive window (announcement order preserved)
//! - **Legacy probe**: one read of the well-known global injection slot,
//!   expanding multiplexed occupants into their sub-providers
//!
//! Key design principles:
//!
//! - Page globals (event target, injection slot) are modeled as explicit
//!   capabilities ([`SignalBus`], [`LegacySlot`]), never read implicitly
//! - The announce listener is registered before the request broadcast and
//!   torn down before discovery returns, on every exit path
//! - Discovery and selection never fail; only the connection handshake
//!   raises, with exactly one display-ready error per invocation
//! - Flag-based MetaMask detection is trusted only for metadata-less legacy
//!   entries; announced entries are identified by their `rdns` trust anchor
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use wallet_discovery::{Connector, MemoryBus, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Inject the platform bindings (an in-memory bus here; real
//!     // deployments bind the page event target and injection slot).
//!     let connector = Connector::builder()
//!         .bus(Arc::new(MemoryBus::new()))
//!         .build();
//!
//!     // List candidates, then connect to MetaMask.
//!     let wallets = connector.discover_providers(None).await;
//!     println!("found {} wallet(s)", wallets.len());
//!
//!     let session = connector.connect_metamask_wallet().await?;
//!     println!("connected as {} on {}", session.accounts[0], session.chain_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`connector`] | [`Connector`] facade and connection handshake |
//! | [`discovery`] | Dual-protocol discovery engine and selection heuristic |
//! | [`error`] | Error taxonomy and [`Result`] alias |
//! | [`identifiers`] | Type-safe metadata wrappers |
//! | [`platform`] | Injectable platform bindings (signal bus, legacy slot) |
//! | [`provider`] | Provider capability contract and discovery output types |

// ============================================================================
// Modules
// ============================================================================

/// Connector facade and connection handshake.
///
/// Use [`Connector::builder()`] to create a configured connector instance.
pub mod connector;

/// Dual-protocol wallet discovery and MetaMask selection.
pub mod discovery;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for announcement metadata.
pub mod identifiers;

/// Injectable platform bindings.
///
/// Capabilities over the page globals both discovery channels reach.
pub mod platform;

/// Provider capability contract and discovery output types.
pub mod provider;

// ============================================================================
// Re-exports
// ============================================================================

// Connector types
pub use connector::{ConnectPhase, ConnectionResult, Connector, ConnectorBuilder};

// Discovery entry points
pub use discovery::selection::{metamask_branded, select_metamask};
pub use discovery::{DiscoveryEngine, DEFAULT_ANNOUNCE_WINDOW};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{AnnouncementId, Rdns};

// Platform bindings
pub use platform::{AnnouncementStream, LegacySlot, MemoryBus, SignalBus, StaticSlot};

// Provider types
pub use provider::{
    Announcement, DiscoveredWallet, ProviderEvent, ProviderEventStream, ProviderFlags,
    ProviderHandle, ProviderInfo, RpcCall, RpcError, WalletProvider,
};
