// src/types.rs

//! Ethereum wire types used by the typed method façades.
//!
//! Quantities and hashes use the 0x-prefixed hex forms the node speaks;
//! `alloy_primitives` handles that mapping under serde.

use alloy_primitives::{Address, Bloom, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// Call shape submitted to `eth_estimateGas`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EstimateGasRequest {
    /// Destination address; omitted entirely for contract creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
}

impl EstimateGasRequest {
    /// Estimate for a plain transaction (zero destination address).
    pub fn transaction() -> Self {
        Self {
            to: Some(Address::ZERO),
        }
    }

    /// Estimate for contract creation (`to` omitted).
    pub fn contract_creation() -> Self {
        Self { to: None }
    }
}

/// Transaction submission shape for `eth_sendTransaction`.
///
/// `to` and `value` are always serialized (`null` meaning contract
/// creation / zero value respectively); the remaining fields are omitted
/// when unset and left for the node to default.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    // ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    pub value: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<U64>,
}

/// A log entry attached to a transaction receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    // ---
    pub log_index: U64,
    pub block_number: U256,
    pub block_hash: B256,
    pub transaction_hash: B256,
    pub transaction_index: U64,
    pub address: Address,
    pub data: Bytes,
    pub topics: Vec<B256>,
}

/// Receipt returned by `eth_getTransactionReceipt`.
///
/// Nullable fields follow the node's wire form: `contract_address` and
/// `to` are `null` unless applicable, `root` only appears on pre-receipt
/// -status chains.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    // ---
    pub block_hash: B256,
    pub block_number: U256,
    #[serde(default)]
    pub contract_address: Option<Address>,
    pub cumulative_gas_used: U256,
    pub from: Address,
    pub gas_used: U256,
    #[serde(default)]
    pub logs: Vec<Log>,
    pub logs_bloom: Bloom,
    #[serde(default)]
    pub root: Option<B256>,
    #[serde(default)]
    pub to: Option<Address>,
    pub transaction_hash: B256,
    pub transaction_index: U64,
}
