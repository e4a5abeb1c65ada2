//! Fee, slippage and price arithmetic.
//!
//! Everything here is integer arithmetic on [`U256`]: these values end up in
//! calldata and must match what the contracts compute. Divisions truncate
//! toward zero.

use crate::OrderError;
use alloy::primitives::U256;
use gelato_constants::BPS_DENOMINATOR;

const WAD_DECIMALS: u8 = 18;

/// Breakdown of an output amount into protocol fee, slippage allowance and
/// the minimum return that remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinReturn {
    /// The minimum return the order accepts.
    pub min_return: U256,
    /// The slippage allowance deducted.
    pub slippage: U256,
    /// The protocol fee deducted.
    pub gelato_fee: U256,
}

fn bps(value: u32) -> U256 {
    U256::from(value)
}

fn pow10(exp: u8) -> Result<U256, OrderError> {
    U256::from(10).checked_pow(U256::from(exp)).ok_or(OrderError::Overflow)
}

fn checked_mul(a: U256, b: U256) -> Result<U256, OrderError> {
    a.checked_mul(b).ok_or(OrderError::Overflow)
}

fn checked_div(a: U256, b: U256, what: &'static str) -> Result<U256, OrderError> {
    a.checked_div(b).ok_or(OrderError::ZeroAmount(what))
}

/// Resolve the slippage to apply, rejecting overrides that would leave no
/// share of the output once the fee is also taken.
fn resolve_slippage(
    fee_bps: u16,
    slippage_bps: u16,
    extra_slippage_bps: Option<u32>,
) -> Result<u32, OrderError> {
    let slippage = extra_slippage_bps.unwrap_or(u32::from(slippage_bps));
    if u32::from(fee_bps).saturating_add(slippage) >= u32::from(BPS_DENOMINATOR) {
        return Err(OrderError::InvalidSlippage(slippage));
    }
    Ok(slippage)
}

/// Deduct the protocol fee and slippage from an output amount.
///
/// - `fee = max(1, output * fee_bps / 10000)`
/// - `slippage = output * slippage_bps / 10000`, where `extra_slippage_bps`
///   replaces the configured slippage when given
/// - `min_return = output - fee - slippage`
///
/// The fee never drops below one unit, so an output of zero cannot carry a
/// fee and fails with [`OrderError::Underflow`].
pub fn fee_and_slippage_adjusted_min_return(
    output_amount: U256,
    fee_bps: u16,
    slippage_bps: u16,
    extra_slippage_bps: Option<u32>,
) -> Result<MinReturn, OrderError> {
    let slippage_bps = resolve_slippage(fee_bps, slippage_bps, extra_slippage_bps)?;
    let denominator = U256::from(BPS_DENOMINATOR);

    let gelato_fee =
        (checked_mul(output_amount, bps(fee_bps.into()))? / denominator).max(U256::from(1));
    let slippage = checked_mul(output_amount, bps(slippage_bps))? / denominator;

    let min_return = output_amount
        .checked_sub(gelato_fee)
        .and_then(|rest| rest.checked_sub(slippage))
        .ok_or(OrderError::Underflow)?;

    Ok(MinReturn { min_return, slippage, gelato_fee })
}

/// Back-solve the output amount from which `min_return` was derived.
///
/// `min_return * 10000 / (10000 - (fee_bps + slippage_bps))`. The
/// truncation in both directions means composing this with
/// [`fee_and_slippage_adjusted_min_return`] recovers the original amount
/// only to within a few units.
pub fn adjusted_min_return(
    min_return: U256,
    fee_bps: u16,
    slippage_bps: u16,
    extra_slippage_bps: Option<u32>,
) -> Result<U256, OrderError> {
    let slippage_bps = resolve_slippage(fee_bps, slippage_bps, extra_slippage_bps)?;
    let fees = u32::from(fee_bps) + slippage_bps;
    let numerator = checked_mul(min_return, U256::from(BPS_DENOMINATOR))?;
    checked_div(numerator, U256::from(u32::from(BPS_DENOMINATOR) - fees), "fee share")
}

/// Exchange rate between two token amounts, as an 18-decimal fixed point
/// number re-based by the ratio of the token decimals.
///
/// Not inverted: `output * 1e18 / input * 10^input_decimals / 10^output_decimals`.
/// Inverted swaps the roles of the two sides.
pub fn exchange_rate(
    input_amount: U256,
    input_decimals: u8,
    output_amount: U256,
    output_decimals: u8,
    invert: bool,
) -> Result<U256, OrderError> {
    let factor = pow10(WAD_DECIMALS)?;
    let (numerator, denominator, up, down, what) = if invert {
        (input_amount, output_amount, output_decimals, input_decimals, "output amount")
    } else {
        (output_amount, input_amount, input_decimals, output_decimals, "input amount")
    };

    let rate = checked_div(checked_mul(numerator, factor)?, denominator, what)?;
    Ok(checked_mul(rate, pow10(up)?)? / pow10(down)?)
}

/// Execution price of a trade, scaled by the decimals of the counterpart
/// token.
///
/// Not inverted: `output * 10^input_decimals / input`. Inverted:
/// `input * 10^output_decimals / output`.
pub fn execution_price(
    input_amount: U256,
    input_decimals: u8,
    output_amount: U256,
    output_decimals: u8,
    invert: bool,
) -> Result<U256, OrderError> {
    if invert {
        let scaled = checked_mul(input_amount, pow10(output_decimals)?)?;
        checked_div(scaled, output_amount, "output amount")
    } else {
        let scaled = checked_mul(output_amount, pow10(input_decimals)?)?;
        checked_div(scaled, input_amount, "input amount")
    }
}
