//! Simulated discovery and connection walkthrough.
//!
//! Demonstrates:
//! - Wiring a Connector over in-memory platform bindings
//! - A genuine MetaMask bridge announcing over the signal bus
//! - A Phantom impersonator occupying the legacy injection slot
//! - Candidate listing, the branded display filter, and the handshake
//!
//! Usage:
//!   cargo run --example simulated_connect
//!   RUST_LOG=wallet_discovery=debug cargo run --example simulated_connect

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use wallet_discovery::{
    metamask_branded, Announcement, AnnouncementId, Connector, MemoryBus, ProviderFlags,
    ProviderHandle, ProviderInfo, Result, RpcCall, RpcError, StaticSlot, WalletProvider,
};

// ============================================================================
// Simulated Wallets
// ============================================================================

/// A wallet that authorizes one account on mainnet.
struct SimulatedMetaMask;

#[async_trait]
impl WalletProvider for SimulatedMetaMask {
    async fn request(&self, call: RpcCall) -> StdResult<Value, RpcError> {
        match call.method.as_str() {
            RpcCall::ETH_REQUEST_ACCOUNTS => {
                Ok(json!(["0x71C7656EC7ab88b098defB751B7401B5f6d8976F"]))
            }
            RpcCall::ETH_CHAIN_ID => Ok(json!("0x1")),
            other => Err(RpcError::method_not_found(other)),
        }
    }
}

/// A wallet that sets `isMetaMask` while being a different product.
struct Impersonator;

#[async_trait]
impl WalletProvider for Impersonator {
    async fn request(&self, call: RpcCall) -> StdResult<Value, RpcError> {
        Err(RpcError::method_not_found(&call.method))
    }

    fn flags(&self) -> ProviderFlags {
        ProviderFlags {
            is_metamask: true,
            is_phantom: true,
        }
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallet_discovery=debug".into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    println!("=== Simulated Connect ===\n");

    // ========================================================================
    // Platform Setup
    // ========================================================================

    let bus = Arc::new(MemoryBus::new());
    bus.register_bridge(Announcement::new(
        ProviderHandle::from_provider(SimulatedMetaMask),
        ProviderInfo::named("MetaMask")
            .with_rdns("io.metamask")
            .with_uuid(AnnouncementId::generate())
            .with_icon("data:image/svg+xml;base64,PHN2Zy8+"),
    ));

    let slot = Arc::new(StaticSlot::holding(ProviderHandle::from_provider(
        Impersonator,
    )));

    let connector = Connector::builder().bus(bus).legacy_slot(slot).build();

    // ========================================================================
    // Discovery
    // ========================================================================

    let wallets = connector.discover_providers(None).await;
    println!("[Discovery] {} candidate(s):", wallets.len());
    for wallet in &wallets {
        let channel = if wallet.is_announced() { "announced" } else { "legacy" };
        println!("            - {} ({channel})", wallet.display_name());
    }

    let branded = metamask_branded(&wallets);
    println!("[Filter]    {} branded entr(ies) for listing UI", branded.len());

    // ========================================================================
    // Connection
    // ========================================================================

    let session = connector.connect_metamask_wallet().await?;
    println!("\n[Connected]");
    println!("            account: {}", session.active_account().unwrap_or("<none>"));
    println!("            chain:   {}", session.chain_id);

    Ok(())
}
