use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};

use super::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q128, U256_MAX};

/// Conversions between ticks and Q64.96 sqrt prices, where the price at `tick` is
/// `1.0001^tick` and ticks span `[MIN_TICK, MAX_TICK]`.
pub struct TickMath;

lazy_static! {
    /// sqrt(1.0001)^-1 in Q128, the starting ratio for odd ticks.
    static ref ODD_TICK_RATIO: BigUint =
        BigUint::parse_bytes(b"fffcb933bd6fad37aa2d162d1a594001", 16).unwrap();

    /// `(bit, sqrt(1.0001)^-(2^bit))` in Q128 for every tick bit above the lowest one.
    pub static ref SQRT_RATIO_STEPS: [(u32, BigUint); 19] = [
        (1, hex_constant(b"fff97272373d413259a46990580e213a")),
        (2, hex_constant(b"fff2e50f5f656932ef12357cf3c7fdcc")),
        (3, hex_constant(b"ffe5caca7e10e4e61c3624eaa0941cd0")),
        (4, hex_constant(b"ffcb9843d60f6159c9db58835c926644")),
        (5, hex_constant(b"ff973b41fa98c081472e6896dfb254c0")),
        (6, hex_constant(b"ff2ea16466c96a3843ec78b326b52861")),
        (7, hex_constant(b"fe5dee046a99a2a811c461f1969c3053")),
        (8, hex_constant(b"fcbe86c7900a88aedcffc83b479aa3a4")),
        (9, hex_constant(b"f987a7253ac413176f2b074cf7815e54")),
        (10, hex_constant(b"f3392b0822b70005940c7a398e4b70f3")),
        (11, hex_constant(b"e7159475a2c29b7443b29c7fa6e889d9")),
        (12, hex_constant(b"d097f3bdfd2022b8845ad8f792aa5825")),
        (13, hex_constant(b"a9f746462d870fdf8a65dc1f90e061e5")),
        (14, hex_constant(b"70d869a156d2a1b890bb3df62baf32f7")),
        (15, hex_constant(b"31be135f97d08fd981231505542fcfa6")),
        (16, hex_constant(b"9aa508b5b7a84e1c677de54f3e99bc9")),
        (17, hex_constant(b"5d6af8dedb81196699c329225ee604")),
        (18, hex_constant(b"2216e584f5fa1ea926041bedfe98")),
        (19, hex_constant(b"48a170391f7dc42444e8fa2")),
    ];

    static ref LOG_2_COEFF: BigInt = BigInt::parse_bytes(b"255738958999603826347141", 10).unwrap();
    static ref TICK_LOW_OFFSET: BigInt =
        BigInt::parse_bytes(b"3402992956809132418596140100660247210", 10).unwrap();
    static ref TICK_HI_OFFSET: BigInt =
        BigInt::parse_bytes(b"291339464771989622907027621153398088495", 10).unwrap();
}

fn hex_constant(digits: &[u8]) -> BigUint {
    BigUint::parse_bytes(digits, 16).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickMathError {
    TickOutOfBounds(i32),
    SqrtPriceOutOfBounds,
    ArithmeticOverflow,
}

impl TickMath {
    pub const MIN_TICK: i32 = MIN_TICK;
    pub const MAX_TICK: i32 = MAX_TICK;

    /// Calculates sqrt(1.0001^tick) * 2^96.
    /// Returns a Q64.96 fixed-point number representing the sqrt of the price ratio.
    ///
    /// Each set bit of `|tick|` multiplies the Q128 ratio by its step constant and truncates
    /// back to Q128. Positive ticks are inverted against `2^256 - 1` and the final shift to
    /// Q64.96 rounds up, so that `get_tick_at_sqrt_ratio` of the result is always `tick`.
    pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<BigUint, TickMathError> {
        if !(Self::MIN_TICK..=Self::MAX_TICK).contains(&tick) {
            return Err(TickMathError::TickOutOfBounds(tick));
        }

        let abs_tick = tick.unsigned_abs();
        let mut ratio = if abs_tick & 0x1 != 0 {
            ODD_TICK_RATIO.clone()
        } else {
            Q128.clone()
        };

        for (bit, constant) in SQRT_RATIO_STEPS.iter() {
            if abs_tick & (1u32 << bit) != 0 {
                ratio = (ratio * constant) >> 128u32;
            }
        }

        if tick > 0 {
            ratio = &*U256_MAX / ratio;
        }

        // Q128 -> Q64.96, rounding up
        let round_up = if (&ratio % (BigUint::one() << 32u32)).is_zero() {
            BigUint::zero()
        } else {
            BigUint::one()
        };
        Ok((ratio >> 32u32) + round_up)
    }

    /// Computes the greatest tick whose sqrt ratio is less than or equal to `sqrt_price_x96`.
    pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: &BigUint) -> Result<i32, TickMathError> {
        if sqrt_price_x96 < &*MIN_SQRT_RATIO || sqrt_price_x96 >= &*MAX_SQRT_RATIO {
            return Err(TickMathError::SqrtPriceOutOfBounds);
        }

        let ratio: BigUint = sqrt_price_x96 << 32;
        // ratio is non-zero here, so bits() >= 1
        let msb = (ratio.bits() - 1) as u32;
        let r = if msb >= 128 {
            ratio >> (msb - 127)
        } else {
            ratio << (127 - msb)
        };

        let log_2 = Self::compute_log_2(r, msb)?;
        let log_sqrt10001 = log_2 * &*LOG_2_COEFF;

        let tick_low = ((&log_sqrt10001 - &*TICK_LOW_OFFSET) >> 128_u8)
            .to_i32()
            .ok_or(TickMathError::ArithmeticOverflow)?;
        let tick_hi = ((&log_sqrt10001 + &*TICK_HI_OFFSET) >> 128_u8)
            .to_i32()
            .ok_or(TickMathError::ArithmeticOverflow)?;

        Ok(if tick_low == tick_hi {
            tick_low
        } else if Self::get_sqrt_ratio_at_tick(tick_hi)? <= *sqrt_price_x96 {
            tick_hi
        } else {
            tick_low
        })
    }

    // log_2 of the Q128 mantissa `r` as a Q64.64 number, 14 fractional bits of precision
    fn compute_log_2(mut r: BigUint, msb: u32) -> Result<BigInt, TickMathError> {
        let mut log_2 = BigInt::from(msb as i32 - 128) << 64;

        for shift in (50..=63).rev() {
            r = (&r * &r) >> 127;
            let f: BigUint = &r >> 128;
            log_2 |= BigInt::from_biguint(Sign::Plus, f.clone()) << shift;
            r >>= f.to_u32().ok_or(TickMathError::ArithmeticOverflow)?;
        }

        Ok(log_2)
    }
}
