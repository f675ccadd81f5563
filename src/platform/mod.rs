//! Injectable platform bindings.
//!
//! Both discovery channels reach page-global state: an ambient event target
//! for the announcement protocol and a well-known mutable slot for legacy
//! injection. This module models each as an explicit capability the engine
//! receives, rather than something read implicitly:
//!
//! | Capability | Real binding | In-memory binding |
//! |------------|--------------|-------------------|
//! | [`SignalBus`] | page event target | [`MemoryBus`] |
//! | [`LegacySlot`] | global injection slot | [`StaticSlot`] |
//!
//! The in-memory bindings make the timeout-bound collection window fully
//! deterministic under test (paired with tokio's paused clock).

// ============================================================================
// Submodules
// ============================================================================

/// Signal bus capability for announcement discovery.
pub mod bus;

/// Legacy injection slot capability.
pub mod legacy;

/// In-memory signal bus for tests and demos.
pub mod memory;

// ============================================================================
// Re-exports
// ============================================================================

pub use bus::{AnnouncementStream, SignalBus};
pub use legacy::{LegacySlot, StaticSlot};
pub use memory::MemoryBus;
