use v3_pool_math::{Address, PoolDeployment, PoolFee};

/// we have 3 or 4 args, token_a:Address, token_b:Address, fee:u24 and an optional
/// deployment json file; defaults to the Uniswap V3 mainnet factory
fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 4 && args.len() != 5 {
        eprintln!("usage: pool_address <token_a> <token_b> <fee> [deployment.json]");
        std::process::exit(1);
    }

    let token_a: Address = args[1].parse().expect("expected a valid address");
    let token_b: Address = args[2].parse().expect("expected a valid address");
    let fee = args[3]
        .parse::<u32>()
        .map_err(|e| e.to_string())
        .and_then(|fee| PoolFee::new(fee).map_err(|e| e.to_string()))
        .expect("expected a valid fee");

    let deployment = match args.get(4) {
        Some(path) => PoolDeployment::from_json_file(path).expect("failed to load deployment"),
        None => PoolDeployment::uniswap_v3(),
    };

    let pool = deployment.compute_pool_address(token_a, token_b, fee);

    println!(
        "pool for {} / {} at fee {} under factory {} is {}",
        token_a,
        token_b,
        fee.value(),
        deployment.factory,
        pool
    );
}
