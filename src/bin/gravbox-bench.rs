use gravbox::{bench_tick, bench_tick_curve};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gravbox-bench", about = "Time one simulation tick across body counts")]
struct Args {
    /// Print a CSV curve instead of the summary table
    #[arg(long)]
    curve: bool,
}

fn main() {
    let args = Args::parse();
    if args.curve {
        bench_tick_curve();
    } else {
        bench_tick();
    }
}
