//! Integration tests for ethkit.
//!
//! Anvil-dependent tests use **testcontainers** to spin up a Docker-based
//! Anvil node and are `#[ignore]`d by default.
//!
//! ```bash
//! # Run everything (Docker must be available):
//! cargo test -p ethkit-integration-tests -- --include-ignored
//! ```

#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, U256};
    use ethkit_evm::adapter::EvmAdapterError;
    use ethkit_evm::{logs, rpc, EvmAdapter};
    use ethkit_signer::{Keystore, LocalSigner, Signer};
    use rust_decimal::Decimal;
    use serde_json::json;
    use testcontainers::{
        core::{IntoContainerPort, WaitFor},
        runners::SyncRunner,
        Container, GenericImage, ImageExt,
    };

    /// Anvil default account 0.
    const ANVIL_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    /// Spins up a Docker Anvil container and returns `(container, rpc_url)`.
    /// The container is dropped (and removed) when it goes out of scope.
    fn start_anvil() -> (Container<GenericImage>, String) {
        let image = GenericImage::new("ghcr.io/foundry-rs/foundry", "latest")
            .with_exposed_port(8545.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Listening on"))
            .with_entrypoint("anvil")
            .with_cmd(vec![
                "--host".to_string(),
                "0.0.0.0".to_string(),
                "--port".to_string(),
                "8545".to_string(),
                "--chain-id".to_string(),
                "31337".to_string(),
            ]);

        let container = image.start().expect("Docker must be available to run Anvil tests");
        let host_port = container.get_host_port_ipv4(8545).expect("failed to get mapped port");
        let url = format!("http://127.0.0.1:{}", host_port);
        (container, url)
    }

    fn anvil_key() -> [u8; 32] {
        let bytes = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);
        key
    }

    // -----------------------------------------------------------------
    // Offline: keystore and signer against Anvil's well-known key
    // -----------------------------------------------------------------

    #[test]
    fn test_anvil_key_round_trips_through_keystore() {
        let tmp = tempfile::tempdir().unwrap();
        let expected: Address = ANVIL_ACCOUNT.parse().unwrap();

        let (address, path) =
            Keystore::create_from_key(tmp.path(), "anvil", &anvil_key()).unwrap();
        assert_eq!(address, expected);

        let signer = LocalSigner::new(Keystore::unlock(&path, "anvil").unwrap());
        assert_eq!(signer.address(), expected);

        let sig = signer.sign_message(b"hello anvil").unwrap();
        let encoded = format!("0x{}", hex::encode(sig.to_bytes()));
        assert_eq!(ethkit_core::sig_rsv(&encoded).unwrap(), sig);
    }

    #[test]
    fn test_adapter_rejects_bad_url() {
        let err = EvmAdapter::new("not a url").unwrap_err();
        assert!(matches!(err, EvmAdapterError::UrlParse(_)));
    }

    // -----------------------------------------------------------------
    // Anvil via testcontainers
    // -----------------------------------------------------------------

    #[test]
    #[ignore]
    fn test_chain_and_balance() {
        let (_anvil, anvil_url) = start_anvil();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let adapter = EvmAdapter::new(&anvil_url).expect("should connect to Anvil");

            let chain_id = adapter.get_chain_id().await.unwrap();
            assert_eq!(chain_id, 31337, "Anvil default chain ID");

            let account: Address = ANVIL_ACCOUNT.parse().unwrap();
            let balance = adapter.get_eth_balance(account).await.unwrap();
            let ether = ethkit_core::to_decimal(balance, 18).unwrap();
            assert_eq!(ether, Decimal::from(10_000));
        });
    }

    #[test]
    #[ignore]
    fn test_genesis_block() {
        let (_anvil, anvil_url) = start_anvil();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let adapter = EvmAdapter::new(&anvil_url).unwrap();

            let latest = adapter.latest_block_number().await.unwrap();
            let header = adapter.latest_header().await.unwrap();
            assert_eq!(header.number, latest);

            let genesis = adapter.block_by_number(0).await.unwrap();
            assert_eq!(genesis.number, 0);
            assert_eq!(genesis.transaction_count, 0);
            assert_eq!(adapter.transaction_count(genesis.hash).await.unwrap(), 0);

            let missing = adapter.block_by_number(latest + 1_000).await;
            assert!(matches!(missing, Err(EvmAdapterError::NotFound(_))));
        });
    }

    #[test]
    #[ignore]
    fn test_code_at_eoa_is_empty() {
        let (_anvil, anvil_url) = start_anvil();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let adapter = EvmAdapter::new(&anvil_url).unwrap();
            let account: Address = ANVIL_ACCOUNT.parse().unwrap();

            assert!(adapter.code_at(account, None).await.unwrap().is_empty());
            assert!(adapter.code_at(account, Some(0)).await.unwrap().is_empty());

            // eth_call into an account without code returns no data
            let owner = rpc::contract_owner(&adapter, account).await;
            assert!(matches!(owner, Err(EvmAdapterError::AbiDecode(_))));
        });
    }

    #[test]
    #[ignore]
    fn test_raw_rpc_and_unknown_receipt() {
        let (_anvil, anvil_url) = start_anvil();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let adapter = EvmAdapter::new(&anvil_url).unwrap();

            let chain_id = rpc::call_raw(&adapter, "eth_chainId", json!([])).await.unwrap();
            assert_eq!(chain_id, json!("0x7a69"));

            let balance = rpc::call_raw(&adapter, "eth_getBalance", json!([ANVIL_ACCOUNT, "latest"]))
                .await
                .unwrap();
            let wei: U256 = serde_json::from_value(balance).unwrap();
            assert!(wei > U256::ZERO);

            let missing = logs::receipt(&adapter, alloy::primitives::B256::repeat_byte(0x11)).await;
            assert!(matches!(missing, Err(EvmAdapterError::NotFound(_))));
        });
    }
}
