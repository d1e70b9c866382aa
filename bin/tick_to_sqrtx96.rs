use v3_pool_math::libraries::tick_math::TickMath;

// we have 1 arg, the tick

fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: tick_to_sqrtx96 <tick>");
        std::process::exit(1);
    }

    let tick = args[1].parse::<i32>().expect("expected a valid tick");

    let sqrt_x96 = TickMath::get_sqrt_ratio_at_tick(tick).expect("tick out of range");

    println!("sqrt_x96 price for tick {} is {}", tick, sqrt_x96);
}
