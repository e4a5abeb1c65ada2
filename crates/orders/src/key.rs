use crate::OrderError;
use alloy::{
    primitives::{keccak256, Address, Bytes, B256},
    sol_types::SolValue,
};
use gelato_types::Order;

/// The tuple that identifies an order in the limit orders core.
///
/// Two orders with the same tuple share a key. The core uses this for its
/// existence checks, so the key doubles as the order id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderKey {
    /// Order-type handler module.
    pub module: Address,
    /// Deposited token.
    pub input_token: Address,
    /// Order owner.
    pub owner: Address,
    /// Per-order witness.
    pub witness: Address,
    /// Encoded output constraints.
    pub data: Bytes,
}

impl OrderKey {
    /// Create a new key tuple.
    pub const fn new(
        module: Address,
        input_token: Address,
        owner: Address,
        witness: Address,
        data: Bytes,
    ) -> Self {
        Self { module, input_token, owner, witness, data }
    }

    /// Build the key tuple of an order, failing on the first missing field.
    pub fn try_from_order(order: &Order) -> Result<Self, OrderError> {
        Ok(Self {
            module: order.module.ok_or(OrderError::MissingField("module"))?,
            input_token: order.input_token.ok_or(OrderError::MissingField("input token"))?,
            owner: order.owner.ok_or(OrderError::MissingField("owner"))?,
            witness: order.witness.ok_or(OrderError::MissingField("witness"))?,
            data: order.data.clone().ok_or(OrderError::MissingField("data"))?,
        })
    }

    /// ABI-encode the tuple as `(address, address, address, address, bytes)`.
    pub fn abi_encode(&self) -> Vec<u8> {
        (self.module, self.input_token, self.owner, self.witness, self.data.clone())
            .abi_encode_params()
    }

    /// The order key: `keccak256` of the ABI-encoded tuple. This matches the
    /// core's `keyOf`.
    pub fn hash(&self) -> B256 {
        keccak256(self.abi_encode())
    }
}

impl TryFrom<&Order> for OrderKey {
    type Error = OrderError;

    fn try_from(order: &Order) -> Result<Self, Self::Error> {
        Self::try_from_order(order)
    }
}

/// Derive the key of an order from its identifying tuple.
pub fn order_key(
    module: Address,
    input_token: Address,
    owner: Address,
    witness: Address,
    data: &[u8],
) -> B256 {
    OrderKey::new(module, input_token, owner, witness, Bytes::copy_from_slice(data)).hash()
}
