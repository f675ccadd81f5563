//! MetaMask selection heuristic and display filter.
//!
//! Two identification policies coexist deliberately:
//!
//! - [`select_metamask`] picks the handle the connection handshake will
//!   drive. Flag-based detection is spoofable, so it is trusted only for
//!   legacy entries that carry no metadata; the reverse-domain identifier is
//!   the protocol-level trust anchor for announced entries.
//! - [`metamask_branded`] is a stricter, display-only filter over the
//!   announced name, for listing UIs that only render branded entries. It
//!   intentionally does not feed the heuristic above.

// ============================================================================
// Imports
// ============================================================================

use tracing::debug;

use crate::identifiers::Rdns;
use crate::provider::{DiscoveredWallet, ProviderHandle};

// ============================================================================
// Constants
// ============================================================================

/// Display name the branded filter matches exactly.
const METAMASK_DISPLAY_NAME: &str = "MetaMask";

// ============================================================================
// Selection Heuristic
// ============================================================================

/// Picks the one true MetaMask provider from a discovery result.
///
/// Policy, in priority order:
///
/// 1. A legacy (info-less) entry whose flags claim MetaMask and do not also
///    claim Phantom.
/// 2. An announced entry whose `rdns` equals `io.metamask`.
/// 3. `None`.
///
/// Deterministic: the first match in discovery order wins, and the same
/// input always yields the same handle.
#[must_use]
pub fn select_metamask(wallets: &[DiscoveredWallet]) -> Option<ProviderHandle> {
    let flagged = wallets.iter().find(|wallet| {
        wallet.info().is_none() && wallet.provider().flags().claims_metamask_exclusively()
    });
    if let Some(wallet) = flagged {
        debug!("selected legacy provider by identity flags");
        return Some(wallet.provider().clone());
    }

    let announced = wallets.iter().find(|wallet| {
        wallet
            .info()
            .and_then(|info| info.rdns.as_ref())
            .is_some_and(Rdns::is_metamask)
    });
    if let Some(wallet) = announced {
        debug!("selected announced provider by rdns");
        return Some(wallet.provider().clone());
    }

    debug!(candidates = wallets.len(), "no MetaMask provider among candidates");
    None
}

// ============================================================================
// Display Filter
// ============================================================================

/// Keeps only announced entries whose declared name is exactly `MetaMask`.
///
/// Presentation-only; the connection handshake uses [`select_metamask`]
/// instead.
#[must_use]
pub fn metamask_branded(wallets: &[DiscoveredWallet]) -> Vec<&DiscoveredWallet> {
    wallets
        .iter()
        .filter(|wallet| {
            wallet
                .info()
                .and_then(|info| info.name.as_deref())
                .is_some_and(|name| name == METAMASK_DISPLAY_NAME)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
