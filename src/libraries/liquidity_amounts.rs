use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::cmp::min;

use super::{
    constants::{FIXED_POINT_96_RESOLUTION, Q96},
    tick_math::{TickMath, TickMathError},
};

#[derive(Debug, Clone, PartialEq)]
pub enum LiquidityAmountsError {
    TickMath(TickMathError),
    Overflow,
    InvalidPrice,
}

impl From<TickMathError> for LiquidityAmountsError {
    fn from(value: TickMathError) -> Self {
        Self::TickMath(value)
    }
}

fn sort_prices<'a>(
    sqrt_price_a_x96: &'a BigUint,
    sqrt_price_b_x96: &'a BigUint,
) -> (&'a BigUint, &'a BigUint) {
    if sqrt_price_a_x96 > sqrt_price_b_x96 {
        (sqrt_price_b_x96, sqrt_price_a_x96)
    } else {
        (sqrt_price_a_x96, sqrt_price_b_x96)
    }
}

/// Computes the amount of token0 for a given amount of liquidity and a price range.
/// Calculates (liquidity << 96) * (sqrt(upper) - sqrt(lower)) / sqrt(upper) / sqrt(lower),
/// dividing by the upper bound first.
/// # Arguments
/// * `sqrt_price_a_x96` - A sqrt price representing the first tick boundary (Q96 format)
/// * `sqrt_price_b_x96` - A sqrt price representing the second tick boundary (Q96 format)
/// * `liquidity` - The liquidity being valued
/// # Returns
/// * `Result<BigUint, LiquidityAmountsError>` - The amount of token0, truncated
pub fn get_amount0_for_liquidity(
    sqrt_price_a_x96: &BigUint,
    sqrt_price_b_x96: &BigUint,
    liquidity: &BigUint,
) -> Result<BigUint, LiquidityAmountsError> {
    let (sqrt_price_a_x96, sqrt_price_b_x96) = sort_prices(sqrt_price_a_x96, sqrt_price_b_x96);

    if sqrt_price_a_x96.is_zero() {
        return Err(LiquidityAmountsError::InvalidPrice);
    }

    let numerator = (liquidity << FIXED_POINT_96_RESOLUTION) * (sqrt_price_b_x96 - sqrt_price_a_x96);
    Ok(numerator / sqrt_price_b_x96 / sqrt_price_a_x96)
}

/// Computes the amount of token1 for a given amount of liquidity and a price range.
/// Calculates liquidity * (sqrt(upper) - sqrt(lower)) / 2^96.
/// # Arguments
/// * `sqrt_price_a_x96` - A sqrt price representing the first tick boundary (Q96 format)
/// * `sqrt_price_b_x96` - A sqrt price representing the second tick boundary (Q96 format)
/// * `liquidity` - The liquidity being valued
/// # Returns
/// * `BigUint` - The amount of token1, truncated
pub fn get_amount1_for_liquidity(
    sqrt_price_a_x96: &BigUint,
    sqrt_price_b_x96: &BigUint,
    liquidity: &BigUint,
) -> BigUint {
    let (sqrt_price_a_x96, sqrt_price_b_x96) = sort_prices(sqrt_price_a_x96, sqrt_price_b_x96);

    liquidity * (sqrt_price_b_x96 - sqrt_price_a_x96) / &*Q96
}

/// Computes the token0 and token1 value for a given amount of liquidity, the current
/// pool price and the prices at the tick boundaries.
/// # Returns
/// * `(amount0, amount1)`
pub fn get_amounts_for_liquidity_at_prices(
    sqrt_price_x96: &BigUint,
    sqrt_price_a_x96: &BigUint,
    sqrt_price_b_x96: &BigUint,
    liquidity: &BigUint,
) -> Result<(BigUint, BigUint), LiquidityAmountsError> {
    let (sqrt_price_a_x96, sqrt_price_b_x96) = sort_prices(sqrt_price_a_x96, sqrt_price_b_x96);

    if sqrt_price_x96 < sqrt_price_a_x96 {
        let amount0 = get_amount0_for_liquidity(sqrt_price_a_x96, sqrt_price_b_x96, liquidity)?;
        Ok((amount0, BigUint::zero()))
    } else if sqrt_price_x96 < sqrt_price_b_x96 {
        let amount0 = get_amount0_for_liquidity(sqrt_price_x96, sqrt_price_b_x96, liquidity)?;
        let amount1 = get_amount1_for_liquidity(sqrt_price_a_x96, sqrt_price_x96, liquidity);
        Ok((amount0, amount1))
    } else {
        let amount1 = get_amount1_for_liquidity(sqrt_price_a_x96, sqrt_price_b_x96, liquidity);
        Ok((BigUint::zero(), amount1))
    }
}

/// Same as [`get_amounts_for_liquidity_at_prices`] with the range given as ticks.
/// Both boundaries are converted with [`TickMath::get_sqrt_ratio_at_tick`], so an out of
/// range tick is an error even when the current price never reaches it.
pub fn get_amounts_for_liquidity(
    sqrt_price_x96: &BigUint,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: &BigUint,
) -> Result<(BigUint, BigUint), LiquidityAmountsError> {
    let sqrt_price_a_x96 = TickMath::get_sqrt_ratio_at_tick(tick_lower)?;
    let sqrt_price_b_x96 = TickMath::get_sqrt_ratio_at_tick(tick_upper)?;

    get_amounts_for_liquidity_at_prices(
        sqrt_price_x96,
        &sqrt_price_a_x96,
        &sqrt_price_b_x96,
        liquidity,
    )
}

fn to_liquidity(value: BigUint) -> Result<u128, LiquidityAmountsError> {
    value.to_u128().ok_or(LiquidityAmountsError::Overflow)
}

/// Computes the amount of liquidity received for a given amount of token0 and price range.
/// Calculates amount0 * (sqrt(upper) * sqrt(lower)) / (sqrt(upper) - sqrt(lower)).
pub fn get_liquidity_for_amount0(
    sqrt_price_a_x96: &BigUint,
    sqrt_price_b_x96: &BigUint,
    amount0: &BigUint,
) -> Result<u128, LiquidityAmountsError> {
    let (sqrt_price_a_x96, sqrt_price_b_x96) = sort_prices(sqrt_price_a_x96, sqrt_price_b_x96);

    if sqrt_price_a_x96 == sqrt_price_b_x96 {
        return Err(LiquidityAmountsError::InvalidPrice);
    }

    let intermediate = sqrt_price_a_x96 * sqrt_price_b_x96 / &*Q96;
    to_liquidity(amount0 * intermediate / (sqrt_price_b_x96 - sqrt_price_a_x96))
}

/// Computes the amount of liquidity received for a given amount of token1 and price range.
/// Calculates amount1 / (sqrt(upper) - sqrt(lower)).
pub fn get_liquidity_for_amount1(
    sqrt_price_a_x96: &BigUint,
    sqrt_price_b_x96: &BigUint,
    amount1: &BigUint,
) -> Result<u128, LiquidityAmountsError> {
    let (sqrt_price_a_x96, sqrt_price_b_x96) = sort_prices(sqrt_price_a_x96, sqrt_price_b_x96);

    if sqrt_price_a_x96 == sqrt_price_b_x96 {
        return Err(LiquidityAmountsError::InvalidPrice);
    }

    to_liquidity(amount1 * &*Q96 / (sqrt_price_b_x96 - sqrt_price_a_x96))
}

/// Computes the maximum amount of liquidity received for a given amount of token0, token1,
/// the current pool price, and the prices at the tick boundaries.
pub fn get_liquidity_for_amounts(
    sqrt_price_x96: &BigUint,
    sqrt_price_a_x96: &BigUint,
    sqrt_price_b_x96: &BigUint,
    amount0: &BigUint,
    amount1: &BigUint,
) -> Result<u128, LiquidityAmountsError> {
    let (sqrt_price_a_x96, sqrt_price_b_x96) = sort_prices(sqrt_price_a_x96, sqrt_price_b_x96);

    if sqrt_price_a_x96 == sqrt_price_b_x96 {
        return Err(LiquidityAmountsError::InvalidPrice);
    }

    if sqrt_price_x96 <= sqrt_price_a_x96 {
        get_liquidity_for_amount0(sqrt_price_a_x96, sqrt_price_b_x96, amount0)
    } else if sqrt_price_x96 < sqrt_price_b_x96 {
        let liquidity0 = get_liquidity_for_amount0(sqrt_price_x96, sqrt_price_b_x96, amount0)?;
        let liquidity1 = get_liquidity_for_amount1(sqrt_price_a_x96, sqrt_price_x96, amount1)?;
        Ok(min(liquidity0, liquidity1))
    } else {
        get_liquidity_for_amount1(sqrt_price_a_x96, sqrt_price_b_x96, amount1)
    }
}
