//! Announcement metadata and discovery output types.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::{AnnouncementId, Rdns};

use super::ProviderHandle;

// ============================================================================
// ProviderInfo
// ============================================================================

/// Metadata attached to a provider via the announcement protocol.
///
/// All fields are optional: real-world bridges omit them freely, and the
/// crate performs no schema validation beyond this shape. Legacy-discovered
/// providers carry no info at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Reverse-domain identifier (e.g. `io.metamask`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdns: Option<Rdns>,

    /// Per-announcement instance id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<AnnouncementId>,

    /// Display name (e.g. `MetaMask`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Icon image reference (typically a data URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ProviderInfo {
    /// Creates metadata with a display name only.
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the reverse-domain identifier.
    #[inline]
    #[must_use]
    pub fn with_rdns(mut self, rdns: impl Into<Rdns>) -> Self {
        self.rdns = Some(rdns.into());
        self
    }

    /// Sets the per-announcement instance id.
    #[inline]
    #[must_use]
    pub fn with_uuid(mut self, uuid: AnnouncementId) -> Self {
        self.uuid = Some(uuid);
        self
    }

    /// Sets the icon reference.
    #[inline]
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

// ============================================================================
// Announcement
// ============================================================================

/// One announce signal: a provider handle paired with its metadata.
///
/// Carried over the signal bus in response to a request-announcement
/// broadcast. Every received instance is treated as a distinct discovery.
#[derive(Clone)]
pub struct Announcement {
    /// The announced provider.
    pub provider: ProviderHandle,
    /// Metadata declared in the announcement.
    pub info: ProviderInfo,
}

impl Announcement {
    /// Pairs a provider with its announced metadata.
    #[inline]
    #[must_use]
    pub fn new(provider: ProviderHandle, info: ProviderInfo) -> Self {
        Self { provider, info }
    }
}

impl fmt::Debug for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Announcement")
            .field("provider", &self.provider)
            .field("info", &self.info)
            .finish()
    }
}

// ============================================================================
// DiscoveredWallet
// ============================================================================

/// One discovery result: a provider handle plus optional announcement
/// metadata.
///
/// Produced only by the discovery engine and immutable once constructed.
/// Info is present for announcement-discovered entries and absent for
/// legacy-discovered ones. The same underlying provider may appear via both
/// channels; no deduplication is applied.
#[derive(Debug, Clone)]
pub struct DiscoveredWallet {
    provider: ProviderHandle,
    info: Option<ProviderInfo>,
}

impl DiscoveredWallet {
    /// Builds an entry from an announce signal.
    #[inline]
    #[must_use]
    pub(crate) fn announced(announcement: Announcement) -> Self {
        Self {
            provider: announcement.provider,
            info: Some(announcement.info),
        }
    }

    /// Builds an info-less entry from the legacy injection slot.
    #[inline]
    #[must_use]
    pub(crate) fn legacy(provider: ProviderHandle) -> Self {
        Self {
            provider,
            info: None,
        }
    }

    /// The discovered provider.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &ProviderHandle {
        &self.provider
    }

    /// Announcement metadata, absent for legacy-discovered entries.
    #[inline]
    #[must_use]
    pub fn info(&self) -> Option<&ProviderInfo> {
        self.info.as_ref()
    }

    /// Returns `true` if this entry came from the announcement channel.
    #[inline]
    #[must_use]
    pub fn is_announced(&self) -> bool {
        self.info.is_some()
    }

    /// Display name for listing, falling back for unnamed entries.
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.info
            .as_ref()
            .and_then(|info| info.name.as_deref())
            .unwrap_or("Injected wallet")
    }
}

// ============================================================================
// Tests
// ============================================================================
