pub mod config;
pub mod error;
pub mod libraries;
pub mod logs;
pub mod pool;
pub mod scalar;

pub use config::PoolDeployment;
pub use error::Error;
pub use libraries::{liquidity_amounts::get_amounts_for_liquidity, tick_math::TickMath};
pub use pool::types::{Address, InitCodeHash, PoolFee, PoolKey};

#[cfg(test)]
pub mod tests;
