use std::{fmt, str::FromStr};

use ethnum::U256;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::{
    error::Error,
    libraries::{constants::MAX_FEE, numeric::strip_hex_prefix},
};

/// 160-bit account or contract address. Ordering is the unsigned integer ordering of the
/// big-endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const LENGTH: usize = 20;

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_u256(&self) -> U256 {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        U256::from_be_bytes(word)
    }

    /// Left-padded 32-byte ABI word.
    pub fn abi_word(&self) -> [u8; 32] {
        self.to_u256().to_be_bytes()
    }
}

impl FromStr for Address {
    type Err = Error;

    /// Accepts `0x`-prefixed (or bare) hex of either case; exactly 40 digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_hex_prefix(s);
        if digits.len() != 2 * Self::LENGTH {
            return Err(Error::InvalidAddress(s.to_string()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_e| Error::InvalidAddress(s.to_string()))?;
        Ok(Address(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

/// Pool fee tier in hundredths of a bip (500 for 0.05%), a `uint24` on chain.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PoolFee(u32);

impl PoolFee {
    pub fn new(fee: u32) -> Result<Self, Error> {
        if fee > MAX_FEE {
            return Err(Error::InvalidFee(fee.into()));
        }
        Ok(PoolFee(fee))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn abi_word(&self) -> [u8; 32] {
        U256::from(self.0).to_be_bytes()
    }
}

impl TryFrom<i64> for PoolFee {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map_err(|_e| Error::InvalidFee(value))
            .and_then(PoolFee::new)
    }
}

/// Keccak-256 of a pool contract's creation code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InitCodeHash(pub [u8; 32]);

impl FromStr for InitCodeHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(strip_hex_prefix(s), &mut bytes)
            .map_err(|e| Error::InvalidConfig(format!("init code hash {s}: {e}")))?;
        Ok(InitCodeHash(bytes))
    }
}

impl TryFrom<String> for InitCodeHash {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InitCodeHash> for String {
    fn from(value: InitCodeHash) -> Self {
        value.to_string()
    }
}

impl fmt::Display for InitCodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for InitCodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InitCodeHash({})", self)
    }
}

/// Canonical identity of a pool: the two tokens sorted by address, and the fee tier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PoolKey {
    token0: Address,
    token1: Address,
    fee: PoolFee,
}

impl PoolKey {
    /// Equal tokens are not rejected; the key then holds the same address twice.
    pub fn new(token_a: Address, token_b: Address, fee: PoolFee) -> Self {
        // token0 is always the smaller address
        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        PoolKey {
            token0,
            token1,
            fee,
        }
    }

    pub fn token0(&self) -> Address {
        self.token0
    }

    pub fn token1(&self) -> Address {
        self.token1
    }

    pub fn fee(&self) -> PoolFee {
        self.fee
    }

    /// `abi.encode(token0, token1, fee)`: three left-padded 32-byte words.
    pub fn encode(&self) -> [u8; 96] {
        let mut encoded = [0u8; 96];
        encoded[..32].copy_from_slice(&self.token0.abi_word());
        encoded[32..64].copy_from_slice(&self.token1.abi_word());
        encoded[64..].copy_from_slice(&self.fee.abi_word());
        encoded
    }

    /// Keccak-256 of [`PoolKey::encode`], the CREATE2 salt of the pool.
    pub fn hash(&self) -> [u8; 32] {
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&Keccak256::digest(self.encode()));
        hash
    }
}
