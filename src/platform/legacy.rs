//! Legacy injection slot capability.
//!
//! Before the announcement protocol, wallets injected themselves into a
//! single well-known global slot. The slot may hold one provider, or a
//! provider that multiplexes several sub-providers behind one injection
//! point. The engine reads it through [`LegacySlot`] instead of any ambient
//! global, keeping discovery testable without a real page environment.

// ============================================================================
// Imports
// ============================================================================

use parking_lot::Mutex;

use crate::provider::ProviderHandle;

// ============================================================================
// LegacySlot
// ============================================================================

/// Read access to the well-known legacy injection slot.
pub trait LegacySlot: Send + Sync {
    /// The currently injected provider, if any.
    ///
    /// An absent or malformed slot is reported as `None`; the probe never
    /// fails.
    fn injected_provider(&self) -> Option<ProviderHandle>;
}

// ============================================================================
// StaticSlot
// ============================================================================

/// In-memory legacy slot holding at most one provider.
///
/// The slot is mutable, as the page global it models is: a wallet (or a
/// test) can inject or clear at any time. Used by tests and demos; platform
/// glue supplies the real binding in a browser build.
#[derive(Default)]
pub struct StaticSlot {
    slot: Mutex<Option<ProviderHandle>>,
}

impl StaticSlot {
    /// Creates an empty slot.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a slot holding the given provider.
    #[inline]
    #[must_use]
    pub fn holding(provider: ProviderHandle) -> Self {
        Self {
            slot: Mutex::new(Some(provider)),
        }
    }

    /// Injects a provider, replacing any previous occupant.
    pub fn inject(&self, provider: ProviderHandle) {
        *self.slot.lock() = Some(provider);
    }

    /// Clears the slot.
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}

impl LegacySlot for StaticSlot {
    fn injected_provider(&self) -> Option<ProviderHandle> {
        self.slot.lock().clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::result::Result as StdResult;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::provider::{RpcCall, RpcError, WalletProvider};

    struct Dummy;

    #[async_trait]
    impl WalletProvider for Dummy {
        async fn request(&self, call: RpcCall) -> StdResult<Value, RpcError> {
            Err(RpcError::method_not_found(&call.method))
        }
    }

    #[test]
    fn test_empty_slot() {
        let slot = StaticSlot::empty();
        assert!(slot.injected_provider().is_none());
    }

    #[test]
    fn test_inject_and_clear() {
        let handle = ProviderHandle::from_provider(Dummy);
        let slot = StaticSlot::empty();

        slot.inject(handle.clone());
        let read = slot.injected_provider().expect("occupied");
        assert!(read.same_provider(&handle));

        slot.clear();
        assert!(slot.injected_provider().is_none());
    }

    #[test]
    fn test_inject_replaces_occupant() {
        let first = ProviderHandle::from_provider(Dummy);
        let second = ProviderHandle::from_provider(Dummy);
        let slot = StaticSlot::holding(first);

        slot.inject(second.clone());
        let read = slot.injected_provider().expect("occupied");
        assert!(read.same_provider(&second));
    }
}
