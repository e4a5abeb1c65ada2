use alloy::{
    primitives::{Address, Bytes, B256, U256},
    sol_types::{SolCall, SolValue},
};
use gelato_bindings::{ERC20OrderRouter, GelatoLimitOrders};
use gelato_constants::{is_network_gas_token, NATIVE_TOKEN_ADDRESS};

/// How an order deposit reaches the limit orders core.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmissionStrategy {
    /// The native gas token is sent as call value to `depositEth` on the
    /// core.
    NativeDeposit,
    /// An ERC20 is pulled by the order router through `depositToken`. The
    /// owner must have approved the router beforehand.
    TokenDeposit,
}

impl SubmissionStrategy {
    /// Select the strategy for an input token.
    pub const fn for_input_token(input_token: Address) -> Self {
        if is_network_gas_token(input_token) {
            Self::NativeDeposit
        } else {
            Self::TokenDeposit
        }
    }

    /// True for [`SubmissionStrategy::NativeDeposit`].
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::NativeDeposit)
    }
}

/// ABI-encode the output constraints of an order as
/// `(address outputToken, uint256 minReturn, address handler, uint256 maxReturn)`.
pub fn encode_output_constraints(
    output_token: Address,
    min_return: U256,
    handler: Address,
    max_return: U256,
) -> Bytes {
    (output_token, min_return, handler, max_return).abi_encode_params().into()
}

/// ABI-encode a native-token order payload, as the core's `encodeEthOrder`
/// does. The input token is always the native marker.
pub fn encode_eth_order(
    module: Address,
    owner: Address,
    witness: Address,
    data: Bytes,
    secret: B256,
) -> Bytes {
    (module, NATIVE_TOKEN_ADDRESS, owner, witness, data, secret).abi_encode_params().into()
}

/// Calldata for `depositEth(encodedEthOrder)` on the limit orders core.
pub fn encode_deposit_eth(
    module: Address,
    owner: Address,
    witness: Address,
    data: Bytes,
    secret: B256,
) -> Bytes {
    let order = encode_eth_order(module, owner, witness, data, secret);
    GelatoLimitOrders::depositEthCall { _data: order }.abi_encode().into()
}

/// Calldata for `depositToken` on the ERC20 order router.
pub fn encode_deposit_token(
    amount: U256,
    module: Address,
    input_token: Address,
    owner: Address,
    witness: Address,
    data: Bytes,
    secret: B256,
) -> Bytes {
    ERC20OrderRouter::depositTokenCall {
        _amount: amount,
        _module: module,
        _inputToken: input_token,
        _owner: owner,
        _witness: witness,
        _data: data,
        _secret: secret,
    }
    .abi_encode()
    .into()
}
