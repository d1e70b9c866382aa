use v3_pool_math::{get_amounts_for_liquidity, libraries::numeric::parse_decimal};

// we have 4 args, sqrt_x96 price, tick_lower, tick_upper and liquidity

fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!("usage: liquidity_amounts <sqrt_x96> <tick_lower> <tick_upper> <liquidity>");
        std::process::exit(1);
    }

    let sqrt_x96 = parse_decimal(&args[1]).expect("expected a decimal sqrt_x96 price");
    let tick_lower = args[2].parse::<i32>().expect("expected a valid tick_lower");
    let tick_upper = args[3].parse::<i32>().expect("expected a valid tick_upper");
    let liquidity = parse_decimal(&args[4]).expect("expected a decimal liquidity");

    let (amount0, amount1) = get_amounts_for_liquidity(&sqrt_x96, tick_lower, tick_upper, &liquidity)
        .expect("failed to compute amounts");

    println!("amount0: {} , amount1: {}", amount0, amount1);
}
