use crate::{StopLimitOrder, WitnessAndSecret};
use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
};
use serde::{Deserialize, Serialize};

/// One unsigned contract call, ready to be handed to a signer.
///
/// Produced by the order encoders. Signing and broadcast are the business
/// of the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    /// Destination contract.
    to: Address,
    /// Calldata.
    data: Bytes,
    /// Native-token value attached to the call.
    value: U256,
}

impl TransactionData {
    /// Create a new transaction payload.
    pub const fn new(to: Address, data: Bytes, value: U256) -> Self {
        Self { to, data, value }
    }

    /// Get the destination address.
    pub const fn to(&self) -> Address {
        self.to
    }

    /// Get the calldata.
    pub const fn data(&self) -> &Bytes {
        &self.data
    }

    /// Get the attached native-token value.
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Decompose into `(to, data, value)`.
    pub fn into_parts(self) -> (Address, Bytes, U256) {
        (self.to, self.data, self.value)
    }

    /// Convert into a [`TransactionRequest`] for a provider or wallet to
    /// fill and sign.
    pub fn into_request(self) -> TransactionRequest {
        TransactionRequest::default().with_to(self.to).with_input(self.data).with_value(self.value)
    }
}

impl From<TransactionData> for TransactionRequest {
    fn from(tx: TransactionData) -> Self {
        tx.into_request()
    }
}

/// A submission payload together with the witness and secret it commits
/// to, and the order it describes.
///
/// The secret must be retained by the caller: it is required to recognise
/// the order later and is never recoverable from chain data before
/// execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDataWithSecret {
    /// The unsigned submission transaction.
    pub payload: TransactionData,
    /// The witness and its secret.
    pub witness_and_secret: WitnessAndSecret,
    /// The order as encoded in the payload.
    pub order: StopLimitOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_request_carries_all_fields() {
        let tx = TransactionData::new(
            Address::repeat_byte(0x11),
            Bytes::from_static(&[1, 2, 3]),
            U256::from(42),
        );
        let request = tx.clone().into_request();
        assert_eq!(request.to, Some(Address::repeat_byte(0x11).into()));
        assert_eq!(request.input.input(), Some(tx.data()));
        assert_eq!(request.value, Some(U256::from(42)));
    }
}
