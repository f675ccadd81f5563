//! Opaque handle to one injected provider instance.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::result::Result as StdResult;
use std::sync::Arc;

use serde_json::Value;

use super::{ProviderFlags, RpcCall, RpcError, WalletProvider};

// ============================================================================
// ProviderHandle
// ============================================================================

/// Opaque reference to one injected provider instance.
///
/// Identity is reference identity: two handles compare equal via
/// [`same_provider`](Self::same_provider) only when they wrap the same
/// underlying provider object. Handles are cheap to clone and not
/// serializable.
#[derive(Clone)]
pub struct ProviderHandle {
    inner: Arc<dyn WalletProvider>,
}

impl ProviderHandle {
    /// Wraps a shared provider object.
    #[inline]
    #[must_use]
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        Self { inner: provider }
    }

    /// Wraps an owned provider object.
    #[inline]
    #[must_use]
    pub fn from_provider<P: WalletProvider + 'static>(provider: P) -> Self {
        Self::new(Arc::new(provider))
    }

    /// Returns `true` if both handles wrap the same underlying provider.
    #[inline]
    #[must_use]
    pub fn same_provider(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Issues a request against the underlying provider.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`RpcError`] untranslated.
    pub async fn request(&self, call: RpcCall) -> StdResult<Value, RpcError> {
        self.inner.request(call).await
    }

    /// Self-declared identity flags of the underlying provider.
    #[inline]
    #[must_use]
    pub fn flags(&self) -> ProviderFlags {
        self.inner.flags()
    }

    /// Sub-provider list of a multiplexed injection point; empty for
    /// ordinary providers.
    #[inline]
    #[must_use]
    pub fn sub_providers(&self) -> Vec<ProviderHandle> {
        self.inner.sub_providers()
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProviderHandle({:p})", Arc::as_ptr(&self.inner))
    }
}

// ============================================================================
// Tests
// ============================================================================
