//! In-memory signal bus.
//!
//! Drives the announcement protocol without a page environment. Bridges
//! registered with [`MemoryBus::register_bridge`] answer every
//! request-announcement broadcast synchronously, the way a same-frame wallet
//! bridge does; [`MemoryBus::announce`] injects an asynchronous announcement
//! at an arbitrary point in time, the way an iframe-bridged wallet does.

// ============================================================================
// Imports
// ============================================================================

use futures_util::StreamExt;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{trace, warn};

use crate::provider::Announcement;

use super::{AnnouncementStream, SignalBus};

// ============================================================================
// Constants
// ============================================================================

/// Broadcast channel capacity per bus.
///
/// Pages carry a handful of wallet bridges at most; a lagged receiver is a
/// test bug, not an expected condition.
const CHANNEL_CAPACITY: usize = 64;

// ============================================================================
// MemoryBus
// ============================================================================

/// In-memory implementation of [`SignalBus`] for tests and demos.
pub struct MemoryBus {
    announcements: broadcast::Sender<Announcement>,
    bridges: Mutex<Vec<Announcement>>,
}

impl MemoryBus {
    /// Creates a bus with no bridges.
    #[must_use]
    pub fn new() -> Self {
        let (announcements, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            announcements,
            bridges: Mutex::new(Vec::new()),
        }
    }

    /// Registers a bridge that announces itself on every request signal.
    ///
    /// Bridges respond in registration order.
    pub fn register_bridge(&self, announcement: Announcement) {
        self.bridges.lock().push(announcement);
    }

    /// Emits one announce signal immediately, independent of any request.
    ///
    /// Use from a spawned task to simulate late or iframe-bridged
    /// responders.
    pub fn announce(&self, announcement: Announcement) {
        // No receivers means no active discovery window; the signal is lost,
        // as it would be on a real page.
        let _ = self.announcements.send(announcement);
    }

    /// Number of live announce-signal listeners.
    ///
    /// Zero after every `discover` call returns: the engine tears its
    /// subscription down on each exit path.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.announcements.receiver_count()
    }
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalBus for MemoryBus {
    fn subscribe(&self) -> AnnouncementStream {
        let receiver = self.announcements.subscribe();

        futures_util::stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(announcement) => {
                        trace!("announce signal received");
                        return Some((announcement, receiver));
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "announce listener lagged; signals dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        })
        .boxed()
    }

    fn request_providers(&self) {
        let bridges = self.bridges.lock().clone();
        trace!(bridges = bridges.len(), "request-announcement broadcast");

        for announcement in bridges {
            let _ = self.announcements.send(announcement);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
