pub mod constants;
pub mod liquidity_amounts;
pub mod numeric;
pub mod tick_math;
