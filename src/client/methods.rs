// src/client/methods.rs

//! Typed Ethereum method façades.
//!
//! Each method is a fixed mapping from a friendly signature onto one
//! [`RpcClient::call`] invocation with a literal method-name string and a
//! statically-known result shape. No method here carries logic beyond
//! parameter marshalling; semantic validation of arguments is the
//! server's responsibility.
//!
//! Address, block, and position parameters the node accepts as hex
//! strings or tags (`"latest"`, `"earliest"`, `"pending"`) stay `&str`
//! and pass through unvalidated.

use alloy_primitives::{Address, Bytes, B256, B64, U256};
use serde_json::{json, Value};

use crate::types::{EstimateGasRequest, TransactionReceipt, TransactionRequest};
use crate::{Result, RpcClient};

impl RpcClient {
    // --- web3 ---

    /// `web3_clientVersion`
    pub async fn web3_client_version(&self) -> Result<String> {
        self.call("web3_clientVersion", vec![]).await
    }

    /// `web3_sha3` - Keccak-256 of the given hex-encoded data.
    pub async fn web3_sha3(&self, data: &str) -> Result<B256> {
        self.call("web3_sha3", vec![json!(data)]).await
    }

    // --- net ---

    /// `net_version`
    pub async fn net_version(&self) -> Result<String> {
        self.call("net_version", vec![]).await
    }

    /// `net_listening`
    pub async fn net_listening(&self) -> Result<bool> {
        self.call("net_listening", vec![]).await
    }

    /// `net_peerCount`
    pub async fn net_peer_count(&self) -> Result<U256> {
        self.call("net_peerCount", vec![]).await
    }

    // --- eth ---

    /// `eth_protocolVersion`
    pub async fn eth_protocol_version(&self) -> Result<String> {
        self.call("eth_protocolVersion", vec![]).await
    }

    /// `eth_syncing`
    pub async fn eth_syncing(&self) -> Result<bool> {
        self.call("eth_syncing", vec![]).await
    }

    /// `eth_mining`
    pub async fn eth_mining(&self) -> Result<bool> {
        self.call("eth_mining", vec![]).await
    }

    /// `eth_coinbase`
    pub async fn eth_coinbase(&self) -> Result<Address> {
        self.call("eth_coinbase", vec![]).await
    }

    /// `eth_accounts`
    pub async fn eth_accounts(&self) -> Result<Vec<Address>> {
        self.call("eth_accounts", vec![]).await
    }

    /// `eth_hashrate`
    pub async fn eth_hashrate(&self) -> Result<U256> {
        self.call("eth_hashrate", vec![]).await
    }

    /// `eth_submitHashrate`
    pub async fn eth_submit_hashrate(&self, hashrate: B256, id: B256) -> Result<bool> {
        self.call("eth_submitHashrate", vec![json!(hashrate), json!(id)])
            .await
    }

    /// `eth_getWork`
    pub async fn eth_get_work(&self) -> Result<Vec<String>> {
        self.call("eth_getWork", vec![]).await
    }

    /// `eth_submitWork`
    pub async fn eth_submit_work(&self, nonce: B64, header: B256, mix: B256) -> Result<bool> {
        self.call(
            "eth_submitWork",
            vec![json!(nonce), json!(header), json!(mix)],
        )
        .await
    }

    /// `eth_gasPrice`
    pub async fn eth_gas_price(&self) -> Result<U256> {
        self.call("eth_gasPrice", vec![]).await
    }

    /// `eth_estimateGas`
    ///
    /// Use [`EstimateGasRequest::transaction`] or
    /// [`EstimateGasRequest::contract_creation`] for the two canonical
    /// call shapes.
    pub async fn eth_estimate_gas(&self, request: &EstimateGasRequest) -> Result<U256> {
        self.call("eth_estimateGas", vec![json!(request)]).await
    }

    /// `eth_getBalance`
    pub async fn eth_get_balance(&self, address: &str, block: &str) -> Result<U256> {
        self.call("eth_getBalance", vec![json!(address), json!(block)])
            .await
    }

    /// `eth_sign`
    pub async fn eth_sign(&self, address: &str, message: &str) -> Result<Bytes> {
        self.call("eth_sign", vec![json!(address), json!(message)])
            .await
    }

    /// `eth_getCode`
    pub async fn eth_get_code(&self, address: &str, block: &str) -> Result<Bytes> {
        self.call("eth_getCode", vec![json!(address), json!(block)])
            .await
    }

    /// `eth_getStorageAt`
    pub async fn eth_get_storage_at(
        &self,
        address: &str,
        position: &str,
        block: &str,
    ) -> Result<Bytes> {
        self.call(
            "eth_getStorageAt",
            vec![json!(address), json!(position), json!(block)],
        )
        .await
    }

    /// `eth_blockNumber`
    pub async fn eth_block_number(&self) -> Result<U256> {
        self.call("eth_blockNumber", vec![]).await
    }

    /// `eth_getBlockByNumber`
    ///
    /// Block shapes vary across chains and clients, so the result stays
    /// opaque JSON for the caller to interpret. `full` selects full
    /// transaction objects over hashes.
    pub async fn eth_get_block_by_number(&self, number: &str, full: bool) -> Result<Value> {
        self.call("eth_getBlockByNumber", vec![json!(number), json!(full)])
            .await
    }

    /// `eth_getBlockByHash`
    pub async fn eth_get_block_by_hash(&self, hash: &str, full: bool) -> Result<Value> {
        self.call("eth_getBlockByHash", vec![json!(hash), json!(full)])
            .await
    }

    /// `eth_getUncleCountByBlockNumber`
    pub async fn eth_get_uncle_count_by_number(&self, block: U256) -> Result<U256> {
        self.call("eth_getUncleCountByNumber", vec![json!(block)])
            .await
    }

    /// `eth_getUncleCountByBlockHash`
    pub async fn eth_get_uncle_count_by_hash(&self, hash: B256) -> Result<U256> {
        self.call("eth_getUncleCountByHash", vec![json!(hash)]).await
    }

    /// `eth_getBlockTransactionCountByNumber`
    pub async fn eth_get_block_transaction_count_by_number(&self, block: &str) -> Result<U256> {
        self.call("eth_getBlockTransactionCountByNumber", vec![json!(block)])
            .await
    }

    /// `eth_getBlockTransactionCountByHash`
    pub async fn eth_get_block_transaction_count_by_hash(&self, hash: &str) -> Result<U256> {
        self.call("eth_getBlockTransactionCountByHash", vec![json!(hash)])
            .await
    }

    /// `eth_getTransactionCount`
    pub async fn eth_get_transaction_count(&self, address: &str, block: &str) -> Result<U256> {
        self.call(
            "eth_getTransactionCount",
            vec![json!(address), json!(block)],
        )
        .await
    }

    /// `eth_getTransactionByBlockNumberAndIndex`
    pub async fn eth_get_transaction_by_block_number_and_index(
        &self,
        block: &str,
        index: &str,
    ) -> Result<Value> {
        self.call(
            "eth_getTransactionByBlockNumberAndIndex",
            vec![json!(block), json!(index)],
        )
        .await
    }

    /// `eth_getTransactionByBlockHashAndIndex`
    pub async fn eth_get_transaction_by_block_hash_and_index(
        &self,
        block: &str,
        index: &str,
    ) -> Result<Value> {
        self.call(
            "eth_getTransactionByBlockHashAndIndex",
            vec![json!(block), json!(index)],
        )
        .await
    }

    /// `eth_getTransactionByHash`
    pub async fn eth_get_transaction_by_hash(&self, transaction: &str) -> Result<Value> {
        self.call("eth_getTransactionByHash", vec![json!(transaction)])
            .await
    }

    /// `eth_getTransactionReceipt`
    ///
    /// Returns `None` while the transaction is pending.
    pub async fn eth_get_transaction_receipt(
        &self,
        transaction: &str,
    ) -> Result<Option<TransactionReceipt>> {
        self.call("eth_getTransactionReceipt", vec![json!(transaction)])
            .await
    }

    /// `eth_sendTransaction`
    pub async fn eth_send_transaction(&self, request: &TransactionRequest) -> Result<B256> {
        self.call("eth_sendTransaction", vec![json!(request)]).await
    }

    /// `eth_sendRawTransaction`
    pub async fn eth_send_raw_transaction(&self, raw: &str) -> Result<B256> {
        self.call("eth_sendRawTransaction", vec![json!(raw)]).await
    }

    /// `eth_getCompilers`
    pub async fn eth_get_compilers(&self) -> Result<Vec<String>> {
        self.call("eth_getCompilers", vec![]).await
    }

    /// `eth_compileSolidity`
    pub async fn eth_compile_solidity(&self, code: &str) -> Result<Bytes> {
        self.call("eth_compileSolidity", vec![json!(code)]).await
    }

    /// `eth_compileLLL`
    pub async fn eth_compile_lll(&self, code: &str) -> Result<Bytes> {
        self.call("eth_compileLLL", vec![json!(code)]).await
    }

    /// `eth_compileSerpent`
    pub async fn eth_compile_serpent(&self, code: &str) -> Result<Bytes> {
        self.call("eth_compileSerpent", vec![json!(code)]).await
    }
}
