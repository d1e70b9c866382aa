use thiserror::Error;

use crate::libraries::{liquidity_amounts::LiquidityAmountsError, tick_math::TickMathError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid numeric literal: {0}")]
    InvalidNumericLiteral(String),
    #[error("tick {0} is outside of the supported range")]
    TickOutOfRange(i64),
    #[error("sqrt ratio is outside of the supported range")]
    SqrtRatioOutOfRange,
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
    #[error("fee {0} does not fit in 24 bits")]
    InvalidFee(i64),
    #[error("price range boundaries must differ")]
    InvalidPrice,
    #[error("invalid pool deployment config: {0}")]
    InvalidConfig(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

impl From<TickMathError> for Error {
    fn from(value: TickMathError) -> Self {
        match value {
            TickMathError::TickOutOfBounds(tick) => Error::TickOutOfRange(tick.into()),
            TickMathError::SqrtPriceOutOfBounds => Error::SqrtRatioOutOfRange,
            TickMathError::ArithmeticOverflow => Error::ArithmeticOverflow,
        }
    }
}

impl From<LiquidityAmountsError> for Error {
    fn from(value: LiquidityAmountsError) -> Self {
        match value {
            LiquidityAmountsError::TickMath(err) => err.into(),
            LiquidityAmountsError::Overflow => Error::ArithmeticOverflow,
            LiquidityAmountsError::InvalidPrice => Error::InvalidPrice,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidConfig(value.to_string())
    }
}
