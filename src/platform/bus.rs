//! Signal bus capability for announcement discovery.
//!
//! The modern discovery protocol is broadcast/listen over a page-global
//! event target. The engine programs against [`SignalBus`] instead of that
//! ambient target, so the timeout-bound collection window can be driven by
//! an in-memory bus with simulated announcement timing.

// ============================================================================
// Imports
// ============================================================================

use futures_util::stream::BoxStream;

use crate::provider::Announcement;

// ============================================================================
// Types
// ============================================================================

/// Subscription to announce signals.
///
/// Dropping the stream deregisters the listener; the discovery engine
/// drops it before returning on every exit path.
pub type AnnouncementStream = BoxStream<'static, Announcement>;

// ============================================================================
// SignalBus
// ============================================================================

/// Broadcast/listen capability for the announcement protocol.
///
/// # Contract
///
/// - [`subscribe`](Self::subscribe) registers a listener for announce
///   signals. Signals emitted before subscription are not replayed.
/// - [`request_providers`](Self::request_providers) broadcasts the
///   zero-payload "announce yourselves" signal. A bridge that answers
///   synchronously must still be observed by a listener registered before
///   the broadcast, which is why the engine subscribes first.
///
/// Concurrent subscribers each hold an independent registration and may
/// observe each other's broadcast signal; the protocol accepts that race.
pub trait SignalBus: Send + Sync {
    /// Registers an announce-signal listener.
    fn subscribe(&self) -> AnnouncementStream;

    /// Broadcasts the request-announcement signal once.
    fn request_providers(&self);
}
