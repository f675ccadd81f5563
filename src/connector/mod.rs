//! Wallet connector module.
//!
//! This module provides the main entry point for wallet discovery and
//! connection.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Connector`] | Facade over discovery, selection, and the handshake |
//! | [`ConnectorBuilder`] | Fluent configuration builder |
//! | [`ConnectionResult`] | Connected session: handle, accounts, chain id |
//! | [`ConnectPhase`] | Handshake phase, traced through each transition |
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use wallet_discovery::{Connector, MemoryBus, Result};
//!
//! # async fn example() -> Result<()> {
//! let connector = Connector::builder()
//!     .bus(Arc::new(MemoryBus::new()))
//!     .build();
//!
//! let wallets = connector.discover_providers(None).await;
//! let session = connector.connect_metamask_wallet().await?;
//! println!("connected as {}", session.accounts[0]);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder pattern for connector configuration.
pub mod builder;

/// Core connector implementation.
pub mod core;

/// Connection handshake state machine.
pub mod handshake;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::ConnectorBuilder;
pub use core::Connector;
pub use handshake::{ConnectPhase, ConnectionResult};
