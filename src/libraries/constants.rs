use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::One;

lazy_static! {
    pub static ref Q96: BigUint = BigUint::one() << FIXED_POINT_96_RESOLUTION; // 2^96
    pub static ref Q128: BigUint = BigUint::one() << 128; // 2^128
    pub static ref U256_MAX: BigUint = BigUint::from_bytes_be(&[0xff; 32]); // 2^256 - 1

    pub static ref MIN_SQRT_RATIO: BigUint = BigUint::from(4295128739_u64);
    pub static ref MAX_SQRT_RATIO: BigUint =
        BigUint::parse_bytes(b"1461446703485210103287273052203988822378723970342", 10).unwrap();
}

pub const FIXED_POINT_96_RESOLUTION: u8 = 96;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = 887272;

/// Largest fee representable by a `uint24`.
pub const MAX_FEE: u32 = 0xff_ffff;
