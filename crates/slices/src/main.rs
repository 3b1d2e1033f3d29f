use slices_core::Slices;

use anyhow::{bail, Result};
use clap::Parser;

mod cli;

/// The backing sequence used when no items are given on the command line.
const DEMO_ITEMS: [&str; 6] = ["cat", "dog", "fish", "hamster", "parakeet", "sugar glider"];

/// The ranges sliced out of the demo sequence, in print order.
const DEMO_RANGES: [(isize, isize); 4] = [(0, 2), (2, 4), (1, 4), (3, 6)];

fn main() {
    let args = cli::Args::parse();
    if let Err(e) = try_main(&args) {
        println!("{:?}", e);
        std::process::exit(1)
    }
}

fn try_main(args: &cli::Args) -> Result<()> {
    let demo = args.items.is_empty();

    let items: Vec<String> = if demo {
        DEMO_ITEMS.map(String::from).to_vec()
    } else {
        args.items.clone()
    };

    let slices = if demo && args.ranges.is_empty() {
        Slices::new(&items, DEMO_RANGES)
    } else if args.ranges.is_empty() {
        bail!("no ranges given; pass at least one --range START..END");
    } else {
        Slices::new(&items, args.ranges.iter().copied())
    };

    for line in slices.map(|group, _| group.join(args.sep.as_str())) {
        println!("{line}");
    }

    Ok(())
}
