//! Dual-protocol wallet discovery.
//!
//! Discovery runs two channels in sequence and merges their results:
//!
//! 1. **Announcement channel** — subscribe for announce signals, broadcast
//!    one request-announcement signal, then hold the subscription open for a
//!    fixed passive window so asynchronous and iframe-bridged providers can
//!    respond.
//! 2. **Legacy probe** — one synchronous read of the well-known injection
//!    slot, expanding a multiplexed occupant into its sub-providers.
//!
//! The merged list keeps announcement entries first in arrival order, legacy
//! entries appended. Discovery never fails: an absent slot or a silent bus
//! yields an empty (or shorter) list, not an error.

// ============================================================================
// Submodules
// ============================================================================

/// MetaMask selection heuristic and display filter.
pub mod selection;

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use tracing::{debug, trace};

use crate::platform::{LegacySlot, SignalBus};
use crate::provider::DiscoveredWallet;

// ============================================================================
// Constants
// ============================================================================

/// Default passive window for announce signals.
///
/// Fixed, not adaptive: providers that respond later are silently missed,
/// trading completeness for bounded latency.
pub const DEFAULT_ANNOUNCE_WINDOW: Duration = Duration::from_millis(200);

// ============================================================================
// DiscoveryEngine
// ============================================================================

/// Runs the dual discovery protocol over injected platform bindings.
pub struct DiscoveryEngine {
    bus: Arc<dyn SignalBus>,
    legacy: Arc<dyn LegacySlot>,
}

impl DiscoveryEngine {
    /// Creates an engine over the given bindings.
    #[inline]
    #[must_use]
    pub fn new(bus: Arc<dyn SignalBus>, legacy: Arc<dyn LegacySlot>) -> Self {
        Self { bus, legacy }
    }

    /// Discovers injected wallet providers.
    ///
    /// Resolves after at most `window` plus the synchronous cost of one
    /// legacy probe. The announce subscription is registered before the
    /// request broadcast (a synchronous responder must not be missed) and
    /// torn down before this method returns, on every exit path.
    ///
    /// Two concurrent calls each hold an independent subscription and may
    /// observe each other's broadcast; concurrent discovery is not designed
    /// to be issued but degrades to duplicate offers, not corruption.
    pub async fn discover(&self, window: Duration) -> Vec<DiscoveredWallet> {
        let mut found = Vec::new();

        // Subscribe before broadcasting.
        let mut announcements = self.bus.subscribe();
        self.bus.request_providers();

        let deadline = tokio::time::sleep(window);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                () = &mut deadline => {
                    trace!("announce window elapsed");
                    break;
                }
                signal = announcements.next() => match signal {
                    Some(announcement) => {
                        trace!(name = ?announcement.info.name, "provider announced");
                        found.push(DiscoveredWallet::announced(announcement));
                    }
                    // Bus closed: no further signal can arrive, end the
                    // window early.
                    None => {
                        trace!("signal bus closed before window elapsed");
                        break;
                    }
                },
            }
        }

        // Listener teardown before the legacy probe.
        drop(announcements);

        let announced = found.len();
        self.probe_legacy(&mut found);

        debug!(
            announced,
            legacy = found.len() - announced,
            window_ms = window.as_millis() as u64,
            "discovery complete"
        );

        found
    }

    /// Reads the legacy injection slot once, appending its occupants.
    fn probe_legacy(&self, found: &mut Vec<DiscoveredWallet>) {
        let Some(injected) = self.legacy.injected_provider() else {
            trace!("legacy slot empty");
            return;
        };

        let sub_providers = injected.sub_providers();
        if sub_providers.is_empty() {
            found.push(DiscoveredWallet::legacy(injected));
        } else {
            debug!(count = sub_providers.len(), "multiplexed legacy occupant");
            found.extend(sub_providers.into_iter().map(DiscoveredWallet::legacy));
        }
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

    use crate::platform::{MemoryBus, StaticSlot};
    use crate::provider::{
        Announcement, ProviderHandle, ProviderInfo, RpcCall, RpcError, WalletProvider,
    };

    struct Dummy;

    #[async_trait]
    impl WalletProvider for Dummy {
        async fn request(&self, call: RpcCall) -> StdResult<Value, RpcError> {
            Err(RpcError::method_not_found(&call.method))
        }
    }

    /// Bus whose subscription ends immediately, as a torn-down page
    /// environment would.
    struct ClosedBus;

    impl crate::platform::SignalBus for ClosedBus {
        fn subscribe(&self) -> crate::platform::AnnouncementStream {
            futures_util::stream::empty().boxed()
        }

        fn request_providers(&self) {}
    }

    struct Multiplexed {
        children: Vec<ProviderHandle>,
    }

    #[async_trait]
    impl WalletProvider for Multiplexed {
        async fn request(&self, call: RpcCall) -> StdResult<Value, RpcError> {
            Err(RpcError::method_not_found(&call.method))
        }

        fn sub_providers(&self) -> Vec<ProviderHandle> {
            self.children.clone()
        }
    }

    fn announcement(name: &str) -> Announcement {
        Announcement::new(
            ProviderHandle::from_provider(Dummy),
            ProviderInfo::named(name),
        )
    }

    fn engine(bus: &Arc<MemoryBus>, slot: &Arc<StaticSlot>) -> DiscoveryEngine {
        DiscoveryEngine::new(
            Arc::clone(bus) as Arc<dyn crate::platform::SignalBus>,
            Arc::clone(slot) as Arc<dyn crate::platform::LegacySlot>,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_page_yields_empty_list() {
        let bus = Arc::new(MemoryBus::new());
        let slot = Arc::new(StaticSlot::empty());

        let wallets = engine(&bus, &slot).discover(DEFAULT_ANNOUNCE_WINDOW).await;
        assert!(wallets.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_announcements_kept_in_arrival_order() {
        let bus = Arc::new(MemoryBus::new());
        bus.register_bridge(announcement("First"));
        bus.register_bridge(announcement("Second"));
        let slot = Arc::new(StaticSlot::empty());

        let wallets = engine(&bus, &slot).discover(DEFAULT_ANNOUNCE_WINDOW).await;

        let names: Vec<_> = wallets.iter().map(DiscoveredWallet::display_name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_responder_within_window_is_captured() {
        let bus = Arc::new(MemoryBus::new());
        let slot = Arc::new(StaticSlot::empty());

        let late_bus = Arc::clone(&bus);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            late_bus.announce(announcement("Iframe wallet"));
        });

        let wallets = engine(&bus, &slot).discover(DEFAULT_ANNOUNCE_WINDOW).await;
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].display_name(), "Iframe wallet");
    }

    #[tokio::test(start_paused = true)]
    async fn test_responder_after_window_is_missed() {
        let bus = Arc::new(MemoryBus::new());
        let slot = Arc::new(StaticSlot::empty());

        let late_bus = Arc::clone(&bus);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            late_bus.announce(announcement("Too late"));
        });

        let wallets = engine(&bus, &slot).discover(DEFAULT_ANNOUNCE_WINDOW).await;
        assert!(wallets.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_legacy_entries_follow_announced_entries() {
        let bus = Arc::new(MemoryBus::new());
        bus.register_bridge(announcement("Announced"));
        let slot = Arc::new(StaticSlot::holding(ProviderHandle::from_provider(Dummy)));

        let wallets = engine(&bus, &slot).discover(DEFAULT_ANNOUNCE_WINDOW).await;

        assert_eq!(wallets.len(), 2);
        assert!(wallets[0].is_announced());
        assert!(!wallets[1].is_announced());
    }

    #[tokio::test(start_paused = true)]
    async fn test_multiplexed_slot_expands_to_sub_providers() {
        let bus = Arc::new(MemoryBus::new());
        let children = vec![
            ProviderHandle::from_provider(Dummy),
            ProviderHandle::from_provider(Dummy),
            ProviderHandle::from_provider(Dummy),
        ];
        let slot = Arc::new(StaticSlot::holding(ProviderHandle::from_provider(
            Multiplexed {
                children: children.clone(),
            },
        )));

        let wallets = engine(&bus, &slot).discover(DEFAULT_ANNOUNCE_WINDOW).await;

        assert_eq!(wallets.len(), 3);
        for (wallet, child) in wallets.iter().zip(&children) {
            assert!(wallet.info().is_none());
            assert!(wallet.provider().same_provider(child));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_bus_ends_window_early_and_still_probes_legacy() {
        let slot = Arc::new(StaticSlot::holding(ProviderHandle::from_provider(Dummy)));
        let engine = DiscoveryEngine::new(
            Arc::new(ClosedBus),
            Arc::clone(&slot) as Arc<dyn crate::platform::LegacySlot>,
        );

        let start = tokio::time::Instant::now();
        let wallets = engine.discover(Duration::from_secs(5)).await;

        // No virtual time passes: the closed subscription ends the window
        // without waiting it out.
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(wallets.len(), 1);
        assert!(!wallets[0].is_announced());
    }

    #[tokio::test(start_paused = true)]
    async fn test_listener_torn_down_on_return() {
        let bus = Arc::new(MemoryBus::new());
        bus.register_bridge(announcement("Any"));
        let slot = Arc::new(StaticSlot::empty());

        let _ = engine(&bus, &slot).discover(DEFAULT_ANNOUNCE_WINDOW).await;
        assert_eq!(bus.listener_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_provider_via_both_channels_is_not_deduplicated() {
        let bus = Arc::new(MemoryBus::new());
        let handle = ProviderHandle::from_provider(Dummy);
        bus.register_bridge(Announcement::new(
            handle.clone(),
            ProviderInfo::named("MetaMask"),
        ));
        let slot = Arc::new(StaticSlot::holding(handle.clone()));

        let wallets = engine(&bus, &slot).discover(DEFAULT_ANNOUNCE_WINDOW).await;

        assert_eq!(wallets.len(), 2);
        assert!(wallets[0].provider().same_provider(wallets[1].provider()));
    }
}
