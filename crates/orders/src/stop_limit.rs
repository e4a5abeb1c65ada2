use crate::{
    encode_deposit_eth, encode_deposit_token, encode_output_constraints, math, AllowanceSource,
    MinReturn, NoProvider, OrderError, OrderKey, OrderRegistry, SubmissionStrategy,
};
use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, B256, U256},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use gelato_bindings::{GelatoLimitOrders, IERC20};
use gelato_constants::{GelatoConstants, Handler};
use gelato_types::{
    Order, OrderStatus, StopLimitOrder, TransactionData, TransactionDataWithSecret,
    WitnessAndSecret,
};
use tracing::{debug, instrument};

/// Default gas limit for cancellations on Ethereum chains.
const ETHEREUM_CANCEL_GAS_LIMIT: u64 = 500_000;
/// Default gas limit for cancellations on other chains.
const DEFAULT_CANCEL_GAS_LIMIT: u64 = 1_500_000;

/// Arguments of a single order placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionParams {
    /// Token deposited by the owner. The native marker selects the native
    /// deposit path.
    pub input_token: Address,
    /// Token the owner receives.
    pub output_token: Address,
    /// Order owner.
    pub owner: Address,
    /// Per-order witness.
    pub witness: Address,
    /// Amount of input token deposited.
    pub amount: U256,
    /// Output amount above which the order does not trigger.
    pub max_return: U256,
    /// Minimum output amount, after fee and slippage.
    pub min_return: U256,
    /// Private key of the witness.
    pub secret: B256,
    /// Verify the router allowance before encoding an ERC20 deposit.
    pub check_allowance: bool,
}

/// Arguments of a stop-limit order, before fees, slippage and the witness
/// are worked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopLimitParams {
    /// Token deposited by the owner.
    pub input_token: Address,
    /// Token the owner receives.
    pub output_token: Address,
    /// Order owner.
    pub owner: Address,
    /// Amount of input token deposited.
    pub input_amount: U256,
    /// Output amount at the trigger price, before fee and slippage.
    pub trigger_output: U256,
    /// Output amount above which the order does not trigger.
    pub max_return: U256,
    /// Replaces the configured slippage when set.
    pub extra_slippage_bps: Option<u32>,
    /// Verify the router allowance before encoding an ERC20 deposit.
    pub check_allowance: bool,
}

/// Encoder for Gelato stop-limit orders on one chain.
///
/// Holds the immutable chain configuration, the stop-limit module address,
/// the DEX handler, and an optional read-only collaborator `P` used for the
/// allowance and order-existence checks. Nothing here signs or submits.
#[derive(Debug, Clone)]
pub struct StopLimitOrders<P = NoProvider> {
    constants: GelatoConstants,
    module: Address,
    handler: Option<Handler>,
    handler_address: Option<Address>,
    provider: Option<P>,
}

impl StopLimitOrders {
    /// Create a new encoder with no handler and no provider.
    pub const fn new(constants: GelatoConstants, module: Address) -> Self {
        Self { constants, module, handler: None, handler_address: None, provider: None }
    }
}

impl<P> StopLimitOrders<P> {
    /// Attach a read-only network collaborator.
    pub fn with_provider<Q>(self, provider: Q) -> StopLimitOrders<Q> {
        StopLimitOrders {
            constants: self.constants,
            module: self.module,
            handler: self.handler,
            handler_address: self.handler_address,
            provider: Some(provider),
        }
    }

    /// Set the DEX handler and the address of its deployment. Fails if the
    /// handler is not deployed on the configured chain.
    pub fn with_handler(mut self, handler: Handler, address: Address) -> Result<Self, OrderError> {
        if !self.constants.is_valid_handler(handler) {
            return Err(OrderError::InvalidHandler {
                handler,
                chain_id: self.constants.chain_id(),
            });
        }
        self.handler = Some(handler);
        self.handler_address = Some(address);
        Ok(self)
    }

    /// Set the handler address without naming the handler. Used on chains
    /// without a known handler list.
    pub fn with_handler_address(mut self, address: Address) -> Self {
        self.handler_address = Some(address);
        self
    }

    /// Get the chain constants.
    pub const fn constants(&self) -> &GelatoConstants {
        &self.constants
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.constants.chain_id()
    }

    /// Get the stop-limit module address.
    pub const fn module(&self) -> Address {
        self.module
    }

    /// Get the handler, if set.
    pub const fn handler(&self) -> Option<Handler> {
        self.handler
    }

    /// Get the handler address, if set.
    pub const fn handler_address(&self) -> Option<Address> {
        self.handler_address
    }

    /// Get the provider, if set.
    pub const fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// Get the protocol fee in basis points.
    pub const fn gelato_fee_bps(&self) -> u16 {
        self.constants.fee_bps()
    }

    /// Get the default slippage in basis points.
    pub const fn slippage_bps(&self) -> u16 {
        self.constants.slippage_bps()
    }

    /// Derive the key of an order placed through this module.
    pub fn order_key(
        &self,
        input_token: Address,
        owner: Address,
        witness: Address,
        data: Bytes,
    ) -> B256 {
        OrderKey::new(self.module, input_token, owner, witness, data).hash()
    }

    /// Deduct the protocol fee and slippage from an output amount.
    ///
    /// See [`math::fee_and_slippage_adjusted_min_return`].
    pub fn fee_and_slippage_adjusted_min_return(
        &self,
        output_amount: U256,
        extra_slippage_bps: Option<u32>,
    ) -> Result<MinReturn, OrderError> {
        math::fee_and_slippage_adjusted_min_return(
            output_amount,
            self.gelato_fee_bps(),
            self.slippage_bps(),
            extra_slippage_bps,
        )
    }

    /// Back-solve the output amount a minimum return was derived from.
    ///
    /// See [`math::adjusted_min_return`].
    pub fn adjusted_min_return(
        &self,
        min_return: U256,
        extra_slippage_bps: Option<u32>,
    ) -> Result<U256, OrderError> {
        math::adjusted_min_return(
            min_return,
            self.gelato_fee_bps(),
            self.slippage_bps(),
            extra_slippage_bps,
        )
    }

    /// Exchange rate between two amounts. See [`math::exchange_rate`].
    pub fn exchange_rate(
        &self,
        input_amount: U256,
        input_decimals: u8,
        output_amount: U256,
        output_decimals: u8,
        invert: bool,
    ) -> Result<U256, OrderError> {
        math::exchange_rate(input_amount, input_decimals, output_amount, output_decimals, invert)
    }

    /// Execution price of a trade. See [`math::execution_price`].
    pub fn execution_price(
        &self,
        input_amount: U256,
        input_decimals: u8,
        output_amount: U256,
        output_decimals: u8,
        invert: bool,
    ) -> Result<U256, OrderError> {
        math::execution_price(input_amount, input_decimals, output_amount, output_decimals, invert)
    }

    /// Encode an ERC20 `approve` of the order router for `amount`.
    pub fn encode_approval(&self, token: Address, amount: U256) -> TransactionData {
        let data = IERC20::approveCall { spender: self.constants.erc20_order_router(), amount }
            .abi_encode();
        TransactionData::new(token, data.into(), U256::ZERO)
    }

    /// Encode the cancellation of an order.
    ///
    /// Requires input token, witness, output token, min return, owner and
    /// data to be present. When `check_is_active_order` is set, the order
    /// must also still be registered on chain, otherwise this fails with
    /// [`OrderError::OrderNotFound`] and nothing is encoded.
    #[instrument(skip_all, fields(check = check_is_active_order))]
    pub async fn encode_cancellation(
        &self,
        order: &StopLimitOrder,
        check_is_active_order: bool,
    ) -> Result<TransactionData, OrderError>
    where
        P: OrderRegistry + Sync,
    {
        let order = &order.order;
        let input_token = order.input_token.ok_or(OrderError::MissingField("input token"))?;
        let witness = order.witness.ok_or(OrderError::MissingField("witness"))?;
        order.output_token.ok_or(OrderError::MissingField("output token"))?;
        order.min_return.ok_or(OrderError::MissingField("minReturn"))?;
        let owner = order.owner.ok_or(OrderError::MissingField("owner"))?;
        let data = order.data.clone().ok_or(OrderError::MissingField("data"))?;

        if check_is_active_order && !self.is_active_order(order).await? {
            return Err(OrderError::OrderNotFound);
        }

        let calldata = GelatoLimitOrders::cancelOrderCall {
            _module: self.module,
            _inputToken: input_token,
            _owner: owner,
            _witness: witness,
            _data: data,
        }
        .abi_encode();

        Ok(TransactionData::new(self.constants.limit_orders(), calldata.into(), U256::ZERO))
    }

    /// Encode the cancellation of an order as a transaction request from
    /// `signer`, with a default gas limit for the chain.
    ///
    /// Fails with [`OrderError::OwnerMismatch`] if `signer` does not own the
    /// order.
    pub async fn cancel_request(
        &self,
        order: &StopLimitOrder,
        check_is_active_order: bool,
        signer: Address,
    ) -> Result<TransactionRequest, OrderError>
    where
        P: OrderRegistry + Sync,
    {
        let tx = self.encode_cancellation(order, check_is_active_order).await?;

        // presence already checked by the encoder
        let owner = order.order.owner.ok_or(OrderError::MissingField("owner"))?;
        if owner != signer {
            return Err(OrderError::OwnerMismatch { owner, signer });
        }

        let gas_limit = if self.constants.is_ethereum_chain() {
            ETHEREUM_CANCEL_GAS_LIMIT
        } else {
            DEFAULT_CANCEL_GAS_LIMIT
        };
        Ok(tx.into_request().with_from(signer).with_gas_limit(gas_limit))
    }

    /// True if the order is still registered in the limit orders core.
    #[instrument(skip_all)]
    pub async fn is_active_order(&self, order: &Order) -> Result<bool, OrderError>
    where
        P: OrderRegistry + Sync,
    {
        let provider = self.provider.as_ref().ok_or(OrderError::MissingProvider)?;
        let key = OrderKey::try_from_order(order)?;
        provider.exists(&key).await.map_err(OrderError::remote)
    }

    /// Encode an order placement.
    ///
    /// Native-token orders go to `depositEth` on the core with the amount as
    /// call value. ERC20 orders go to `depositToken` on the router with zero
    /// value, after an optional allowance check.
    #[instrument(skip_all, fields(owner = %params.owner, input_token = %params.input_token))]
    pub async fn encode_submission(
        &self,
        params: &SubmissionParams,
    ) -> Result<TransactionData, OrderError>
    where
        P: AllowanceSource + Sync,
    {
        let provider = self.provider.as_ref().ok_or(OrderError::MissingProvider)?;
        let handler = self.handler_address.ok_or(OrderError::MissingHandlerAddress)?;

        if params.input_token == params.output_token {
            return Err(OrderError::SameToken);
        }

        let constraints = encode_output_constraints(
            params.output_token,
            params.min_return,
            handler,
            params.max_return,
        );

        let strategy = SubmissionStrategy::for_input_token(params.input_token);
        debug!(?strategy, "encoding order submission");

        match strategy {
            SubmissionStrategy::NativeDeposit => {
                let data = encode_deposit_eth(
                    self.module,
                    params.owner,
                    params.witness,
                    constraints,
                    params.secret,
                );
                Ok(TransactionData::new(self.constants.limit_orders(), data, params.amount))
            }
            SubmissionStrategy::TokenDeposit => {
                let router = self.constants.erc20_order_router();
                if params.check_allowance {
                    let allowance = provider
                        .allowance(params.input_token, params.owner, router)
                        .await
                        .map_err(OrderError::remote)?;
                    if allowance < params.amount {
                        return Err(OrderError::InsufficientAllowance {
                            allowance,
                            required: params.amount,
                        });
                    }
                }
                let data = encode_deposit_token(
                    params.amount,
                    self.module,
                    params.input_token,
                    params.owner,
                    params.witness,
                    constraints,
                    params.secret,
                );
                Ok(TransactionData::new(router, data, U256::ZERO))
            }
        }
    }

    /// Work out fees, slippage and a fresh witness for a stop-limit order,
    /// and encode its placement.
    ///
    /// The returned secret must be kept by the caller.
    pub async fn encode_stop_limit_order(
        &self,
        params: StopLimitParams,
    ) -> Result<TransactionDataWithSecret, OrderError>
    where
        P: AllowanceSource + Sync,
    {
        self.encode_stop_limit_order_with_secret(params, WitnessAndSecret::random()).await
    }

    /// As [`Self::encode_stop_limit_order`], with a caller-supplied witness
    /// and secret.
    pub async fn encode_stop_limit_order_with_secret(
        &self,
        params: StopLimitParams,
        witness_and_secret: WitnessAndSecret,
    ) -> Result<TransactionDataWithSecret, OrderError>
    where
        P: AllowanceSource + Sync,
    {
        let MinReturn { min_return, .. } = self
            .fee_and_slippage_adjusted_min_return(params.trigger_output, params.extra_slippage_bps)?;

        let submission = SubmissionParams {
            input_token: params.input_token,
            output_token: params.output_token,
            owner: params.owner,
            witness: witness_and_secret.witness,
            amount: params.input_amount,
            max_return: params.max_return,
            min_return,
            secret: witness_and_secret.secret,
            check_allowance: params.check_allowance,
        };
        let payload = self.encode_submission(&submission).await?;

        // the handler address is present, or encode_submission would have failed
        let handler_address = self.handler_address.ok_or(OrderError::MissingHandlerAddress)?;
        let data = encode_output_constraints(
            params.output_token,
            min_return,
            handler_address,
            params.max_return,
        );
        let input_token = params.input_token;
        let id =
            self.order_key(input_token, params.owner, witness_and_secret.witness, data.clone());
        let order = StopLimitOrder {
            order: Order {
                id: Some(id),
                owner: Some(params.owner),
                input_token: Some(input_token),
                output_token: Some(params.output_token),
                min_return: Some(min_return),
                adjusted_min_return: Some(params.trigger_output),
                module: Some(self.module),
                witness: Some(witness_and_secret.witness),
                secret: Some(witness_and_secret.secret),
                input_amount: Some(params.input_amount),
                status: OrderStatus::Open,
                data: Some(data),
                input_data: Some(payload.data().clone()),
                handler: self.handler.map(|handler| handler.to_string()),
                ..Default::default()
            },
            max_return: Some(params.max_return),
            is_expired: false,
        };

        Ok(TransactionDataWithSecret { payload, witness_and_secret, order })
    }
}
