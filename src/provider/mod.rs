//! Provider capability and discovery output types.
//!
//! This module defines the contract every injected wallet satisfies and the
//! data the discovery engine produces:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`WalletProvider`] | Capability trait: async request, flags, sub-providers, events |
//! | [`ProviderHandle`] | Opaque reference to one provider (reference identity) |
//! | [`ProviderInfo`] | Announcement metadata (`rdns`, `uuid`, `name`, `icon`) |
//! | [`Announcement`] | One announce signal: `(handle, info)` |
//! | [`DiscoveredWallet`] | One discovery result: `(handle, info?)` |
//! | [`RpcCall`] / [`RpcError`] | Provider request and provider-level failure |

// ============================================================================
// Submodules
// ============================================================================

/// The [`WalletProvider`] capability contract and request types.
pub mod capability;

/// Opaque provider handle with reference identity.
pub mod handle;

/// Announcement metadata and discovery output types.
pub mod info;

// ============================================================================
// Re-exports
// ============================================================================

pub use capability::{
    ProviderEvent, ProviderEventStream, ProviderFlags, RpcCall, RpcError, WalletProvider,
};
pub use handle::ProviderHandle;
pub use info::{Announcement, DiscoveredWallet, ProviderInfo};
