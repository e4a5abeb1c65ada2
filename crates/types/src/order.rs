use alloy::primitives::{Address, Bytes, B256, U256};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// Orders are never deleted. Status only moves forward, driven by on-chain
/// events as reported by the subgraph.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Resting on chain, waiting to be executed.
    #[default]
    Open,
    /// Cancelled by its owner.
    Cancelled,
    /// Executed by the Gelato network.
    Executed,
    /// Still open on chain, but its trigger window has passed.
    Expired,
}

impl OrderStatus {
    /// The lowercase name used by the subgraph.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Cancelled => "cancelled",
            Self::Executed => "executed",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resting limit order.
///
/// Orders are created off-chain and become authoritative once the submission
/// transaction is mined. Most fields are optional because the same record
/// is used for partially-populated orders built locally and for orders
/// returned by the subgraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    /// Order key, as derived from module, input token, owner, witness and
    /// data.
    pub id: Option<B256>,
    /// Owner of the deposited funds.
    pub owner: Option<Address>,
    /// Token deposited by the owner.
    pub input_token: Option<Address>,
    /// Token the owner receives on execution.
    pub output_token: Option<Address>,
    /// Minimum amount of output token, after fee and slippage.
    pub min_return: Option<U256>,
    /// Minimum return before fee and slippage are deducted.
    pub adjusted_min_return: Option<U256>,
    /// Order-type handler module.
    pub module: Option<Address>,
    /// Per-order ephemeral address identifying the order.
    pub witness: Option<Address>,
    /// Private key of the witness, revealed at execution or cancellation.
    pub secret: Option<B256>,
    /// Amount of input token deposited.
    pub input_amount: Option<U256>,
    /// Vault holding the deposit.
    pub vault: Option<Address>,
    /// Amount of output token received on execution.
    pub bought: Option<U256>,
    /// Auxiliary execution data.
    pub aux_data: Option<Bytes>,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Hash of the submission transaction.
    pub created_tx_hash: Option<B256>,
    /// Hash of the execution transaction.
    pub executed_tx_hash: Option<B256>,
    /// Hash of the cancellation transaction.
    pub cancelled_tx_hash: Option<B256>,
    /// Block in which the order was created.
    #[serde(with = "crate::serde_helpers::quoted_u64_opt")]
    pub block_number: Option<u64>,
    /// Unix timestamp of creation.
    #[serde(with = "crate::serde_helpers::quoted_u64_opt")]
    pub created_at: Option<u64>,
    /// Unix timestamp of the last status change.
    #[serde(with = "crate::serde_helpers::quoted_u64_opt")]
    pub updated_at: Option<u64>,
    /// Block of the last status change.
    #[serde(with = "crate::serde_helpers::quoted_u64_opt")]
    pub updated_at_block: Option<u64>,
    /// Hash of the block of the last status change.
    pub updated_at_block_hash: Option<B256>,
    /// Encoded output constraints.
    pub data: Option<Bytes>,
    /// Full deposit payload.
    pub input_data: Option<Bytes>,
    /// Name of the DEX handler.
    pub handler: Option<String>,
}

impl Order {
    /// True if the order has not been cancelled or executed.
    pub const fn is_open(&self) -> bool {
        matches!(self.status, OrderStatus::Open)
    }
}

/// A stop-limit order: a limit order with a maximum return bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StopLimitOrder {
    /// The underlying order.
    #[serde(flatten)]
    pub order: Order,
    /// Maximum amount of output token, above which the order does not
    /// trigger.
    pub max_return: Option<U256>,
    /// True if the order is open but can no longer be executed.
    pub is_expired: bool,
}

impl StopLimitOrder {
    /// The effective status, reporting [`OrderStatus::Expired`] for open
    /// orders whose trigger window has passed.
    pub const fn status(&self) -> OrderStatus {
        match self.order.status {
            OrderStatus::Open if self.is_expired => OrderStatus::Expired,
            status => status,
        }
    }

    /// Last status change timestamp, or zero if unknown.
    pub fn updated_at(&self) -> u64 {
        self.order.updated_at.unwrap_or_default()
    }
}

impl From<Order> for StopLimitOrder {
    fn from(order: Order) -> Self {
        Self { order, ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    const SUBGRAPH_ORDER: &str = r#"{
        "id": "0x1ca4bd7d9c50a9cf05e1d0d61f9b7b6e1e2a3f5ea1d1c4d79a8b8f3e0e5c3b11",
        "owner": "0x4c8a8e2ee4e8d1a0e5a5b2b9dc3c2e6b5a0b6c7d",
        "inputToken": "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
        "outputToken": "0x6b175474e89094c44da98b954eedeac495271d0f",
        "minReturn": "993000",
        "maxReturn": "1100000",
        "adjustedMinReturn": "1000000",
        "module": "0x3333333333333333333333333333333333333333",
        "witness": "0x5555555555555555555555555555555555555555",
        "secret": null,
        "inputAmount": "1000000000000000000",
        "vault": null,
        "bought": null,
        "auxData": null,
        "status": "open",
        "isExpired": true,
        "createdTxHash": "0x2222222222222222222222222222222222222222222222222222222222222222",
        "executedTxHash": null,
        "cancelledTxHash": null,
        "blockNumber": "14000000",
        "createdAt": "1650000000",
        "updatedAt": "1650000100",
        "updatedAtBlock": "14000010",
        "updatedAtBlockHash": "0x3333333333333333333333333333333333333333333333333333333333333333",
        "data": "0x1234",
        "inputData": "0x",
        "handler": "uniswap"
    }"#;

    #[test]
    fn deserializes_subgraph_order() {
        let order: StopLimitOrder = serde_json::from_str(SUBGRAPH_ORDER).unwrap();
        assert_eq!(
            order.order.id,
            Some(b256!("0x1ca4bd7d9c50a9cf05e1d0d61f9b7b6e1e2a3f5ea1d1c4d79a8b8f3e0e5c3b11"))
        );
        assert_eq!(
            order.order.output_token,
            Some(address!("0x6b175474e89094c44da98b954eedeac495271d0f"))
        );
        assert_eq!(order.order.min_return, Some(U256::from(993_000)));
        assert_eq!(order.max_return, Some(U256::from(1_100_000)));
        assert_eq!(order.order.secret, None);
        assert_eq!(order.order.block_number, Some(14_000_000));
        assert_eq!(order.updated_at(), 1_650_000_100);
        assert_eq!(order.order.handler.as_deref(), Some("uniswap"));
        assert_eq!(order.order.data, Some(Bytes::from_static(&[0x12, 0x34])));
    }

    #[test]
    fn expired_open_orders_report_expired() {
        let mut order: StopLimitOrder = serde_json::from_str(SUBGRAPH_ORDER).unwrap();
        assert!(order.order.is_open());
        assert_eq!(order.status(), OrderStatus::Expired);

        order.is_expired = false;
        assert_eq!(order.status(), OrderStatus::Open);

        order.is_expired = true;
        order.order.status = OrderStatus::Cancelled;
        assert_eq!(order.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn missing_fields_default() {
        let order: StopLimitOrder = serde_json::from_str(r#"{"status":"executed"}"#).unwrap();
        assert_eq!(order.status(), OrderStatus::Executed);
        assert!(order.order.owner.is_none());
        assert!(!order.is_expired);
    }
}
