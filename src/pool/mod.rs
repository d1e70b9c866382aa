pub mod pool_address;
pub mod types;
