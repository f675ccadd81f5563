//! Builder pattern for connector configuration.
//!
//! Provides a fluent API for configuring and creating [`Connector`]
//! instances.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use wallet_discovery::{Connector, MemoryBus, StaticSlot};
//!
//! let connector = Connector::builder()
//!     .bus(Arc::new(MemoryBus::new()))
//!     .legacy_slot(Arc::new(StaticSlot::empty()))
//!     .build();
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use crate::discovery::DEFAULT_ANNOUNCE_WINDOW;
use crate::platform::{LegacySlot, MemoryBus, SignalBus, StaticSlot};

use super::core::Connector;

// ============================================================================
// ConnectorBuilder
// ============================================================================

/// Builder for configuring a [`Connector`] instance.
///
/// Use [`Connector::builder()`] to create a new builder. Every binding has
/// a default modeling a page with no wallet bridges (a silent bus, an empty
/// slot), so construction never fails; a real deployment injects its
/// platform bindings explicitly.
#[derive(Default)]
pub struct ConnectorBuilder {
    /// Signal bus binding for the announcement protocol.
    bus: Option<Arc<dyn SignalBus>>,
    /// Legacy injection slot binding.
    legacy: Option<Arc<dyn LegacySlot>>,
    /// Passive announce window override.
    announce_window: Option<Duration>,
}

// ============================================================================
// ConnectorBuilder Implementation
// ============================================================================

impl ConnectorBuilder {
    /// Creates a new connector builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the signal bus binding.
    ///
    /// Defaults to a fresh [`MemoryBus`] with no bridges, over which no
    /// provider will ever announce itself.
    #[inline]
    #[must_use]
    pub fn bus(mut self, bus: Arc<dyn SignalBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Sets the legacy injection slot binding.
    ///
    /// Defaults to an empty [`StaticSlot`].
    #[inline]
    #[must_use]
    pub fn legacy_slot(mut self, legacy: Arc<dyn LegacySlot>) -> Self {
        self.legacy = Some(legacy);
        self
    }

    /// Overrides the passive announce window used when the caller does not
    /// pass one explicitly.
    ///
    /// Defaults to 200 ms. Shortening the window misses slow responders;
    /// lengthening it delays every discovery by the same amount.
    #[inline]
    #[must_use]
    pub fn announce_window(mut self, window: Duration) -> Self {
        self.announce_window = Some(window);
        self
    }

    /// Builds the connector.
    #[must_use]
    pub fn build(self) -> Connector {
        let bus = self
            .bus
            .unwrap_or_else(|| Arc::new(MemoryBus::new()) as Arc<dyn SignalBus>);
        let legacy = self
            .legacy
            .unwrap_or_else(|| Arc::new(StaticSlot::empty()) as Arc<dyn LegacySlot>);
        let announce_window = self.announce_window.unwrap_or(DEFAULT_ANNOUNCE_WINDOW);

        Connector::new(bus, legacy, announce_window)
    }
}

// ============================================================================
// Tests
// ============================================================================
