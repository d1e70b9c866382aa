use sha3::{Digest, Keccak256};

use super::types::{Address, InitCodeHash, PoolKey};

const CREATE2_PREFIX: u8 = 0xff;

/// Deterministically computes the CREATE2 address of the pool identified by `key`.
///
/// The preimage is `0xff ++ factory ++ keccak256(abi.encode(key)) ++ init_code_hash`
/// (85 bytes) and the address is the low 20 bytes of its Keccak-256 hash.
pub fn compute_pool_address(
    factory: &Address,
    key: &PoolKey,
    init_code_hash: &InitCodeHash,
) -> Address {
    let mut preimage = [0u8; 85];
    preimage[0] = CREATE2_PREFIX;
    preimage[1..21].copy_from_slice(factory.as_bytes());
    preimage[21..53].copy_from_slice(&key.hash());
    preimage[53..].copy_from_slice(&init_code_hash.0);

    let hash = Keccak256::digest(preimage);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address(address)
}
