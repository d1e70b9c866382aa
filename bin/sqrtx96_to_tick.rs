use v3_pool_math::libraries::{numeric::parse_decimal, tick_math::TickMath};

// we have 1 arg, the decimal sqrt_x96 price

fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: sqrtx96_to_tick <sqrt_x96>");
        std::process::exit(1);
    }

    let sqrt_x96 = parse_decimal(&args[1]).expect("expected a decimal number");

    let tick = TickMath::get_tick_at_sqrt_ratio(&sqrt_x96).expect("sqrt_x96 out of range");

    println!("tick for sqrt_x96 price {} is {}", sqrt_x96, tick);
}
