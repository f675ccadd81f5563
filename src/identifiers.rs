//! Type-safe identifiers for discovered providers.
//!
//! Newtype wrappers prevent mixing announcement metadata fields at compile
//! time and give the reverse-domain trust anchor a single definition.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// AnnouncementId
// ============================================================================

/// Per-announcement instance id (`uuid` field of the announce payload).
///
/// A provider bridge generates a fresh id for every announcement it emits,
/// so two announcements from the same wallet carry different ids. This is
/// an announcement identity, not a provider identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnouncementId(Uuid);

impl AnnouncementId {
    /// Generates a fresh random id.
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Rdns
// ============================================================================

/// Reverse-domain identifier of an announced wallet (e.g. `io.metamask`).
///
/// Under the announcement protocol this is the trust anchor for wallet
/// identification: self-declared boolean flags are spoofable, the rdns is
/// treated as authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rdns(String);

impl Rdns {
    /// The MetaMask reverse-domain identifier.
    pub const METAMASK: &'static str = "io.metamask";

    /// Wraps a reverse-domain string.
    #[inline]
    #[must_use]
    pub fn new(rdns: impl Into<String>) -> Self {
        Self(rdns.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this identifier names MetaMask.
    #[inline]
    #[must_use]
    pub fn is_metamask(&self) -> bool {
        self.0 == Self::METAMASK
    }
}

impl fmt::Display for Rdns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Rdns {
    fn from(rdns: &str) -> Self {
        Self::new(rdns)
    }
}

// ============================================================================
// Tests
// ============================================================================
