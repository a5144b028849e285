//! Typed façade tests.
//!
//! Each case pins the method-name literal and parameter marshalling of a
//! façade, and the decode of the node's hex wire forms into the typed
//! result shapes.

use std::str::FromStr;

use alloy_primitives::{Address, B256, B64, U256};
use bytes::Bytes;
use serde_json::{json, Value};

use eth_rpc::{
    //
    create_memory_transport,
    EstimateGasRequest,
    Result,
    RpcClient,
    RpcConfig,
    TransactionRequest,
};

/// Client whose transport checks the method/params sent and returns a
/// canned result payload.
fn expecting_client(expected_method: &'static str, expected_params: Value, result: Value) -> RpcClient {
    // ---
    let transport = create_memory_transport(move |body: Bytes| {
        let request: Value = serde_json::from_slice(&body).expect("malformed request body");

        assert_eq!(request["method"], expected_method);
        assert_eq!(request["params"], expected_params);

        let response = json!({
            "jsonrpc": "2.0",
            "id": request["id"].clone(),
            "result": result.clone(),
        });
        Ok(Bytes::from(serde_json::to_vec(&response).unwrap()))
    });

    RpcClient::with_transport(transport, RpcConfig::new("memory://node"))
}

#[tokio::test]
async fn test_web3_client_version() -> Result<()> {
    // ---
    let client = expecting_client("web3_clientVersion", json!([]), json!("Geth/v1.13.14"));
    assert_eq!(client.web3_client_version().await?, "Geth/v1.13.14");
    Ok(())
}

#[tokio::test]
async fn test_web3_sha3_decodes_hash() -> Result<()> {
    // ---
    let digest = "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";
    let client = expecting_client("web3_sha3", json!(["0x"]), json!(digest));

    let hash = client.web3_sha3("0x").await?;
    assert_eq!(hash, B256::from_str(digest).unwrap());
    Ok(())
}

#[tokio::test]
async fn test_net_peer_count_decodes_hex_quantity() -> Result<()> {
    // ---
    let client = expecting_client("net_peerCount", json!([]), json!("0x2"));
    assert_eq!(client.net_peer_count().await?, U256::from(2));
    Ok(())
}

#[tokio::test]
async fn test_eth_get_balance() -> Result<()> {
    // ---
    let client = expecting_client(
        "eth_getBalance",
        json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"]),
        json!("0x0234c8a3397aab58"),
    );

    let balance = client
        .eth_get_balance("0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest")
        .await?;
    assert_eq!(balance, U256::from(0x0234c8a3397aab58u64));
    Ok(())
}

#[tokio::test]
async fn test_eth_accounts_decodes_addresses() -> Result<()> {
    // ---
    let client = expecting_client(
        "eth_accounts",
        json!([]),
        json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1"]),
    );

    let accounts = client.eth_accounts().await?;
    assert_eq!(
        accounts,
        vec![Address::from_str("0x407d73d8a49eeb85d32cf465507dd71d507100c1").unwrap()]
    );
    Ok(())
}

#[tokio::test]
async fn test_eth_estimate_gas_canonical_shapes() -> Result<()> {
    // ---
    let client = expecting_client(
        "eth_estimateGas",
        json!([{"to": "0x0000000000000000000000000000000000000000"}]),
        json!("0x5208"),
    );
    let gas = client
        .eth_estimate_gas(&EstimateGasRequest::transaction())
        .await?;
    assert_eq!(gas, U256::from(21000));

    // Contract creation omits `to` entirely.
    let client = expecting_client("eth_estimateGas", json!([{}]), json!("0x5208"));
    client
        .eth_estimate_gas(&EstimateGasRequest::contract_creation())
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_eth_send_transaction_marshals_request() -> Result<()> {
    // ---
    let hash = "0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331e";
    let client = expecting_client(
        "eth_sendTransaction",
        json!([{
            "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
            "to": "0x0000000000000000000000000000000000000000",
            "value": "0x1",
        }]),
        json!(hash),
    );

    let request = TransactionRequest {
        from: Some(Address::from_str("0x407d73d8a49eeb85d32cf465507dd71d507100c1").unwrap()),
        to: Some(Address::ZERO),
        value: Some(U256::from(1)),
        ..Default::default()
    };

    let sent = client.eth_send_transaction(&request).await?;
    assert_eq!(sent, B256::from_str(hash).unwrap());
    Ok(())
}

#[tokio::test]
async fn test_eth_send_raw_transaction() -> Result<()> {
    // ---
    let hash = "0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331e";
    let client = expecting_client("eth_sendRawTransaction", json!(["0xd46e8dd6"]), json!(hash));

    let sent = client.eth_send_raw_transaction("0xd46e8dd6").await?;
    assert_eq!(sent, B256::from_str(hash).unwrap());
    Ok(())
}

#[tokio::test]
async fn test_eth_submit_work_marshals_fixed_width_params() -> Result<()> {
    // ---
    let client = expecting_client(
        "eth_submitWork",
        json!([
            "0x0000000000000001",
            "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
            "0xd1fe5700000000000000000000000000d1fe5700000000000000000000000000",
        ]),
        json!(true),
    );

    let accepted = client
        .eth_submit_work(
            B64::from_str("0x0000000000000001").unwrap(),
            B256::from_str("0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef")
                .unwrap(),
            B256::from_str("0xd1fe5700000000000000000000000000d1fe5700000000000000000000000000")
                .unwrap(),
        )
        .await?;
    assert!(accepted);
    Ok(())
}

#[tokio::test]
async fn test_eth_get_block_by_number_is_opaque_json() -> Result<()> {
    // ---
    let block = json!({
        "number": "0x1b4",
        "hash": "0x9b83c12c69edb74f6c8dd5d052765c1adf940e320bd1291696e6fa07829eee71",
        "transactions": [],
    });
    let client = expecting_client(
        "eth_getBlockByNumber",
        json!(["0x1b4", true]),
        block.clone(),
    );

    let fetched = client.eth_get_block_by_number("0x1b4", true).await?;
    assert_eq!(fetched, block);
    Ok(())
}

#[tokio::test]
async fn test_eth_get_transaction_receipt_decodes_typed_shape() -> Result<()> {
    // ---
    let client = expecting_client(
        "eth_getTransactionReceipt",
        json!(["0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238"]),
        json!({
            "blockHash": "0x8216c5785ac562ff41e2dcfdf5785ac562ff41e2dcfdf829c5a142f1fccd7dbb",
            "blockNumber": "0xb",
            "contractAddress": null,
            "cumulativeGasUsed": "0x33bc",
            "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
            "gasUsed": "0x4dc",
            "logs": [],
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "to": "0x0000000000000000000000000000000000000000",
            "transactionHash": "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238",
            "transactionIndex": "0x1",
        }),
    );

    let receipt = client
        .eth_get_transaction_receipt(
            "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238",
        )
        .await?
        .expect("receipt should be present");

    assert_eq!(receipt.block_number, U256::from(11));
    assert_eq!(receipt.cumulative_gas_used, U256::from(0x33bc));
    assert_eq!(receipt.contract_address, None);
    assert!(receipt.logs.is_empty());
    assert_eq!(receipt.transaction_index, alloy_primitives::U64::from(1));
    Ok(())
}

#[tokio::test]
async fn test_eth_get_transaction_receipt_pending_is_none() -> Result<()> {
    // ---
    let client = expecting_client(
        "eth_getTransactionReceipt",
        json!(["0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238"]),
        json!(null),
    );

    let receipt = client
        .eth_get_transaction_receipt(
            "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238",
        )
        .await?;
    assert!(receipt.is_none());
    Ok(())
}

#[tokio::test]
async fn test_eth_get_code_decodes_hex_bytes() -> Result<()> {
    // ---
    let client = expecting_client(
        "eth_getCode",
        json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "0x2"]),
        json!("0x600160008035811a81"),
    );

    let code = client
        .eth_get_code("0x407d73d8a49eeb85d32cf465507dd71d507100c1", "0x2")
        .await?;
    assert_eq!(code.as_ref(), &[0x60, 0x01, 0x60, 0x00, 0x80, 0x35, 0x81, 0x1a, 0x81]);
    Ok(())
}
