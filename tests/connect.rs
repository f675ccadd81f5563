//! End-to-end discovery and connection scenarios over in-memory bindings.
//!
//! Every test runs on tokio's paused clock, so the 200 ms announce window
//! elapses on virtual time and the suite stays instant and deterministic.

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use wallet_discovery::{
    Announcement, Connector, Error, MemoryBus, ProviderFlags, ProviderHandle, ProviderInfo,
    RpcCall, RpcError, StaticSlot, WalletProvider,
};

// ============================================================================
// Fake Wallet
// ============================================================================

/// Scriptable wallet: fixed flags and per-method responses.
struct FakeWallet {
    flags: ProviderFlags,
    accounts: StdResult<Vec<String>, RpcError>,
    chain_id: StdResult<String, RpcError>,
}

impl FakeWallet {
    fn healthy(accounts: &[&str], chain_id: &str) -> Self {
        Self {
            flags: ProviderFlags::default(),
            accounts: Ok(accounts.iter().map(ToString::to_string).collect()),
            chain_id: Ok(chain_id.to_string()),
        }
    }

    fn failing_accounts(err: RpcError) -> Self {
        Self {
            flags: ProviderFlags::default(),
            accounts: Err(err),
            chain_id: Ok("0x1".to_string()),
        }
    }

    fn with_flags(mut self, flags: ProviderFlags) -> Self {
        self.flags = flags;
        self
    }
}

#[async_trait]
impl WalletProvider for FakeWallet {
    async fn request(&self, call: RpcCall) -> StdResult<Value, RpcError> {
        match call.method.as_str() {
            RpcCall::ETH_REQUEST_ACCOUNTS => self.accounts.clone().map(|accounts| json!(accounts)),
            RpcCall::ETH_CHAIN_ID => self.chain_id.clone().map(Value::String),
            other => Err(RpcError::method_not_found(other)),
        }
    }

    fn flags(&self) -> ProviderFlags {
        self.flags
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn metamask_info() -> ProviderInfo {
    ProviderInfo::named("MetaMask").with_rdns("io.metamask")
}

/// Connector over a bus with one announced MetaMask bridge.
fn connector_with_announced(wallet: FakeWallet) -> (Connector, ProviderHandle) {
    let handle = ProviderHandle::from_provider(wallet);
    let bus = Arc::new(MemoryBus::new());
    bus.register_bridge(Announcement::new(handle.clone(), metamask_info()));

    let connector = Connector::builder().bus(bus).build();
    (connector, handle)
}

/// Connector over an empty bus with one legacy-injected wallet.
fn connector_with_legacy(wallet: FakeWallet) -> (Connector, ProviderHandle) {
    let handle = ProviderHandle::from_provider(wallet);
    let connector = Connector::builder()
        .legacy_slot(Arc::new(StaticSlot::holding(handle.clone())))
        .build();
    (connector, handle)
}

// ============================================================================
// Connection Scenarios
// ============================================================================

#[tokio::test(start_paused = true)]
async fn connect_succeeds_against_announced_metamask() {
    let (connector, handle) =
        connector_with_announced(FakeWallet::healthy(&["0xABC123", "0xDEF456"], "0x1"));

    let session = connector
        .connect_metamask_wallet()
        .await
        .expect("handshake succeeds");

    assert!(session.provider.same_provider(&handle));
    assert_eq!(session.accounts, vec!["0xABC123", "0xDEF456"]);
    assert_eq!(session.chain_id, "0x1");
    assert_eq!(session.active_account(), Some("0xABC123"));
}

#[tokio::test(start_paused = true)]
async fn connect_succeeds_against_legacy_flagged_metamask() {
    let (connector, handle) = connector_with_legacy(
        FakeWallet::healthy(&["0xABC123"], "0xaa36a7").with_flags(ProviderFlags::metamask()),
    );

    let session = connector
        .connect_metamask_wallet()
        .await
        .expect("handshake succeeds");

    assert!(session.provider.same_provider(&handle));
    assert_eq!(session.chain_id, "0xaa36a7");
}

#[tokio::test(start_paused = true)]
async fn connect_without_providers_reports_not_found() {
    let connector = Connector::builder().build();

    let err = connector
        .connect_metamask_wallet()
        .await
        .expect_err("nothing to connect to");

    assert_eq!(err, Error::NotFound);
    assert_eq!(
        err.to_string(),
        "MetaMask provider not found. If you have multiple wallets, disable others or open MetaMask."
    );
}

#[tokio::test(start_paused = true)]
async fn pending_request_translates_to_already_pending() {
    let (connector, _) =
        connector_with_announced(FakeWallet::failing_accounts(RpcError::with_code(-32002)));

    let err = connector
        .connect_metamask_wallet()
        .await
        .expect_err("pending popup");

    assert_eq!(err, Error::AlreadyPending);
    assert_eq!(
        err.to_string(),
        "A connection request is already pending in MetaMask. Please open the extension and complete it."
    );
    assert!(err.is_recoverable());
}

#[tokio::test(start_paused = true)]
async fn user_rejection_translates_to_user_rejected() {
    let (connector, _) =
        connector_with_announced(FakeWallet::failing_accounts(RpcError::with_code(4001)));

    let err = connector
        .connect_metamask_wallet()
        .await
        .expect_err("user declined");

    assert_eq!(err, Error::UserRejected);
    assert_eq!(err.to_string(), "Request rejected in MetaMask.");
}

#[tokio::test(start_paused = true)]
async fn unrecognized_code_passes_provider_message_through() {
    let (connector, _) = connector_with_announced(FakeWallet::failing_accounts(RpcError::new(
        Some(7),
        Some("boom".to_string()),
    )));

    let err = connector
        .connect_metamask_wallet()
        .await
        .expect_err("provider fault");

    assert_eq!(err, Error::unknown("boom"));
    assert_eq!(err.to_string(), "boom");
}

#[tokio::test(start_paused = true)]
async fn missing_code_and_message_yield_generic_fallback() {
    let (connector, _) =
        connector_with_announced(FakeWallet::failing_accounts(RpcError::new(None, None)));

    let err = connector
        .connect_metamask_wallet()
        .await
        .expect_err("provider fault");

    assert_eq!(err.to_string(), "Failed to connect wallet.");
}

#[tokio::test(start_paused = true)]
async fn chain_request_failure_is_translated_too() {
    let wallet = FakeWallet {
        flags: ProviderFlags::default(),
        accounts: Ok(vec!["0xABC123".to_string()]),
        chain_id: Err(RpcError::with_code(4001)),
    };
    let (connector, _) = connector_with_announced(wallet);

    let err = connector
        .connect_metamask_wallet()
        .await
        .expect_err("chain request declined");

    assert_eq!(err, Error::UserRejected);
}

#[tokio::test(start_paused = true)]
async fn genuine_rdns_wins_over_legacy_impersonator() {
    // A Phantom impersonator occupies the legacy slot; the genuine wallet
    // announces with the rdns trust anchor. The handshake must drive the
    // announced one.
    let impersonator = ProviderHandle::from_provider(
        FakeWallet::failing_accounts(RpcError::with_message("impersonator was driven"))
            .with_flags(ProviderFlags {
                is_metamask: true,
                is_phantom: true,
            }),
    );
    let genuine = ProviderHandle::from_provider(FakeWallet::healthy(&["0xABC123"], "0x1"));

    let bus = Arc::new(MemoryBus::new());
    bus.register_bridge(Announcement::new(genuine.clone(), metamask_info()));
    let connector = Connector::builder()
        .bus(bus)
        .legacy_slot(Arc::new(StaticSlot::holding(impersonator)))
        .build();

    let session = connector
        .connect_metamask_wallet()
        .await
        .expect("genuine wallet connects");
    assert!(session.provider.same_provider(&genuine));
}

// ============================================================================
// Discovery Scenarios
// ============================================================================

#[tokio::test(start_paused = true)]
async fn discovery_lists_announced_then_legacy() {
    let bus = Arc::new(MemoryBus::new());
    bus.register_bridge(Announcement::new(
        ProviderHandle::from_provider(FakeWallet::healthy(&[], "0x1")),
        ProviderInfo::named("Rabby").with_rdns("io.rabby"),
    ));
    bus.register_bridge(Announcement::new(
        ProviderHandle::from_provider(FakeWallet::healthy(&[], "0x1")),
        metamask_info(),
    ));

    let connector = Connector::builder()
        .bus(bus)
        .legacy_slot(Arc::new(StaticSlot::holding(ProviderHandle::from_provider(
            FakeWallet::healthy(&[], "0x1"),
        ))))
        .build();

    let wallets = connector.discover_providers(None).await;

    let names: Vec<_> = wallets.iter().map(|w| w.display_name()).collect();
    assert_eq!(names, vec!["Rabby", "MetaMask", "Injected wallet"]);
    assert!(wallets[2].info().is_none());
}

#[tokio::test(start_paused = true)]
async fn per_call_window_override_is_honored() {
    let bus = Arc::new(MemoryBus::new());
    let connector = Connector::builder().bus(bus.clone()).build();

    // Announces 500 ms in, well outside the default window but inside the
    // widened per-call one.
    let late_bus = Arc::clone(&bus);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        late_bus.announce(Announcement::new(
            ProviderHandle::from_provider(FakeWallet::healthy(&[], "0x1")),
            metamask_info(),
        ));
    });

    let wallets = connector
        .discover_providers(Some(Duration::from_secs(1)))
        .await;
    assert_eq!(wallets.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn get_metamask_provider_reruns_discovery() {
    let (connector, handle) = connector_with_announced(FakeWallet::healthy(&[], "0x1"));

    let first = connector.get_metamask_provider().await.expect("present");
    let second = connector.get_metamask_provider().await.expect("present");
    assert!(first.same_provider(&handle));
    assert!(second.same_provider(&handle));

    let empty = Connector::builder().build();
    assert!(empty.get_metamask_provider().await.is_none());
}
