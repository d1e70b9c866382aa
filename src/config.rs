use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    logs::{log, INFO},
    pool::{
        pool_address,
        types::{Address, InitCodeHash, PoolFee, PoolKey},
    },
};

pub const UNISWAP_V3_FACTORY: &str = "0x1f98431c8ad98523631ae4a59f267346ea31f984";
pub const UNISWAP_V3_POOL_INIT_CODE_HASH: &str =
    "0xe34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54";

lazy_static! {
    static ref UNISWAP_V3: PoolDeployment = PoolDeployment {
        factory: UNISWAP_V3_FACTORY.parse().unwrap(),
        init_code_hash: UNISWAP_V3_POOL_INIT_CODE_HASH.parse().unwrap(),
    };
}

/// A factory and the init code hash of the pools it deploys.
///
/// ```json
/// {
///   "factory": "0x1f98431c8ad98523631ae4a59f267346ea31f984",
///   "init_code_hash": "0xe34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54"
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolDeployment {
    pub factory: Address,
    pub init_code_hash: InitCodeHash,
}

impl PoolDeployment {
    pub fn new(factory: Address, init_code_hash: InitCodeHash) -> Self {
        Self {
            factory,
            init_code_hash,
        }
    }

    /// Uniswap V3 on Ethereum mainnet.
    pub fn uniswap_v3() -> Self {
        *UNISWAP_V3
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))?;
        let deployment = Self::from_json_str(&json)?;
        log!(
            INFO,
            "[config]: loaded deployment factory={} init_code_hash={} from {}",
            deployment.factory,
            deployment.init_code_hash,
            path.display()
        );
        Ok(deployment)
    }

    /// Address of the pool for `token_a`/`token_b` at `fee`; argument order does not matter.
    pub fn compute_pool_address(
        &self,
        token_a: Address,
        token_b: Address,
        fee: PoolFee,
    ) -> Address {
        let key = PoolKey::new(token_a, token_b, fee);
        pool_address::compute_pool_address(&self.factory, &key, &self.init_code_hash)
    }
}

impl Default for PoolDeployment {
    fn default() -> Self {
        Self::uniswap_v3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniswap_v3_deployment() {
        let deployment = PoolDeployment::default();
        assert_eq!(deployment.factory.to_string(), UNISWAP_V3_FACTORY);
        assert_eq!(
            deployment.init_code_hash.to_string(),
            UNISWAP_V3_POOL_INIT_CODE_HASH
        );
    }

    #[test]
    fn test_deployment_from_json() {
        let json = r#"{
            "factory": "0x1F98431c8aD98523631AE4a59f267346ea31F984",
            "init_code_hash": "0xe34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54"
        }"#;
        assert_eq!(
            PoolDeployment::from_json_str(json).unwrap(),
            PoolDeployment::uniswap_v3()
        );
    }

    #[test]
    fn test_deployment_json_round_trip() {
        let deployment = PoolDeployment::new(
            "0x0227628f3f023bb0b980b67d528571c95c6dac1c".parse().unwrap(),
            InitCodeHash([0x11; 32]),
        );
        let json = serde_json::to_string(&deployment).unwrap();
        assert_eq!(PoolDeployment::from_json_str(&json).unwrap(), deployment);
    }

    #[test]
    fn test_malformed_deployment_is_rejected() {
        for json in [
            "",
            "{}",
            r#"{"factory": "0x1f98", "init_code_hash": "0xe34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54"}"#,
            r#"{"factory": "0x1f98431c8ad98523631ae4a59f267346ea31f984", "init_code_hash": "0xe34f"}"#,
            r#"{"factory": "0x1f98431c8ad98523631ae4a59f267346ea31f984", "init_code_hash": "0xe34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54", "fee": 3}"#,
        ] {
            assert!(
                matches!(
                    PoolDeployment::from_json_str(json),
                    Err(Error::InvalidConfig(_))
                ),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            PoolDeployment::from_json_file("/nonexistent/deployment.json"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_deployment_computes_pool_address() {
        let address = PoolDeployment::uniswap_v3()
            .compute_pool_address(
                "0xdac17f958d2ee523a2206206994597c13d831ec7".parse().unwrap(),
                "0xaaaebe6fe48e54f431b0c390cfaf0b017d09d42d".parse().unwrap(),
                PoolFee::new(10000).unwrap(),
            );
        assert_eq!(
            address.to_string(),
            "0x8254fdec9b3776a3adaec877b64446b9d862491b"
        );
    }
}
