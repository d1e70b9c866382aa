//! Query-engine scalar functions over the core math.
//!
//! Arguments and results are text, the way a SQL engine hands them over. This is the only
//! layer that turns a failure into a `NULL` (`None`) or empty result; the error is logged
//! to the DEBUG sink first.

use crate::{
    config::PoolDeployment,
    error::Error,
    libraries::{liquidity_amounts::get_amounts_for_liquidity, numeric},
    logs::{log, DEBUG},
    pool::{
        pool_address::compute_pool_address,
        types::{Address, InitCodeHash, PoolFee, PoolKey},
    },
};

pub const UNI_V3_COMPUTE_POOL_ADDR: &str = "UniV3ComputePoolAddr";
pub const UNI_V3_GET_LIQUIDITY_AMOUNTS: &str = "UniV3GetLiquidityAmounts";
pub const CONVERT_HEX_TO_BIG_INTEGER: &str = "ConvertHexToBigInteger";

fn null_on_error<T>(function: &str, result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log!(DEBUG, "[{function}]: {err}");
            None
        }
    }
}

fn tick_argument(tick: i64) -> Result<i32, Error> {
    i32::try_from(tick).map_err(|_e| Error::TickOutOfRange(tick))
}

fn compute_pool_addr_inner(
    factory: &str,
    token0: &str,
    token1: &str,
    fee: Option<i64>,
    init_code_hash: &InitCodeHash,
) -> Result<String, Error> {
    let factory: Address = factory.parse()?;
    let fee = PoolFee::try_from(fee.ok_or(Error::MissingArgument("fee"))?)?;
    let key = PoolKey::new(token0.parse()?, token1.parse()?, fee);
    Ok(compute_pool_address(&factory, &key, init_code_hash).to_string())
}

/// `UniV3ComputePoolAddr(factory, token0, token1, fee)` with the given init code hash.
/// Tokens may come in either order.
pub fn uni_v3_compute_pool_addr_with_init_code_hash(
    factory: &str,
    token0: &str,
    token1: &str,
    fee: Option<i64>,
    init_code_hash: &InitCodeHash,
) -> Option<String> {
    null_on_error(
        UNI_V3_COMPUTE_POOL_ADDR,
        compute_pool_addr_inner(factory, token0, token1, fee, init_code_hash),
    )
}

/// `UniV3ComputePoolAddr(factory, token0, token1, fee)` for pools deployed with the
/// Uniswap V3 pool init code.
pub fn uni_v3_compute_pool_addr(
    factory: &str,
    token0: &str,
    token1: &str,
    fee: Option<i64>,
) -> Option<String> {
    let init_code_hash = PoolDeployment::uniswap_v3().init_code_hash;
    uni_v3_compute_pool_addr_with_init_code_hash(factory, token0, token1, fee, &init_code_hash)
}

fn get_liquidity_amounts_inner(
    sqrt_ratio_x96: &str,
    tick_lower: Option<i64>,
    tick_upper: Option<i64>,
    liquidity: &str,
) -> Result<Vec<String>, Error> {
    let sqrt_ratio_x96 = numeric::parse_decimal(sqrt_ratio_x96)?;
    let tick_lower = tick_argument(tick_lower.ok_or(Error::MissingArgument("tick_lower"))?)?;
    let tick_upper = tick_argument(tick_upper.ok_or(Error::MissingArgument("tick_upper"))?)?;
    let liquidity = numeric::parse_decimal(liquidity)?;
    let (amount0, amount1) =
        get_amounts_for_liquidity(&sqrt_ratio_x96, tick_lower, tick_upper, &liquidity)?;
    Ok(vec![amount0.to_string(), amount1.to_string()])
}

/// `UniV3GetLiquidityAmounts(sqrt_ratio_x96, tick_lower, tick_upper, liquidity)`:
/// `[amount0, amount1]` as decimal strings.
pub fn uni_v3_get_liquidity_amounts(
    sqrt_ratio_x96: &str,
    tick_lower: Option<i64>,
    tick_upper: Option<i64>,
    liquidity: &str,
) -> Option<Vec<String>> {
    null_on_error(
        UNI_V3_GET_LIQUIDITY_AMOUNTS,
        get_liquidity_amounts_inner(sqrt_ratio_x96, tick_lower, tick_upper, liquidity),
    )
}

/// `ConvertHexToBigInteger(hex)`: decimal text, or an empty string when `hex` is not a
/// hex literal.
pub fn convert_hex_to_big_integer(hex: &str) -> String {
    null_on_error(
        CONVERT_HEX_TO_BIG_INTEGER,
        numeric::convert_hex_to_decimal(hex),
    )
    .unwrap_or_default()
}
