use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use modeq::{resolve, MoSweep, NaiveScan, Query, RangeMode};
use rand::{thread_rng, Rng};

#[derive(clap::Parser)]
struct Args {
    /// File with whitespace-separated integers.
    file: PathBuf,
    /// Number of random queries to answer.
    queries: usize,
    /// Largest threshold to draw.
    #[clap(short, long, default_value_t = 4)]
    max_threshold: usize,
    /// Answer with the offline sweep instead of per-query scans.
    #[clap(short, long)]
    sweep: bool,
    /// Spread the per-query scans over a thread pool.
    #[clap(short, long, conflicts_with = "sweep")]
    parallel: bool,
}

fn main() {
    let args = Args::parse();
    eprintln!("Reading...");
    let a = std::fs::read_to_string(&args.file)
        .unwrap()
        .split_whitespace()
        .map(|x| x.parse::<i64>().unwrap())
        .collect::<Vec<_>>();
    eprintln!("Length: {}", a.len());

    let mut rng = thread_rng();
    let queries = (0..args.queries)
        .map(|_| {
            let left = rng.gen_range(0..a.len());
            let right = rng.gen_range(left..a.len());
            Query::new(left, right, rng.gen_range(1..=args.max_threshold))
        })
        .collect::<Vec<_>>();
    eprintln!("Queries: {}", queries.len());

    eprintln!("Resolving... with sweep {} parallel {}", args.sweep, args.parallel);
    let start = std::time::Instant::now();
    let answers = if args.sweep {
        resolve::<MoSweep>(&a, &queries)
    } else if args.parallel {
        Ok(NaiveScan::new(&a).par_resolve(&queries))
    } else {
        resolve::<NaiveScan>(&a, &queries)
    }
    .unwrap();
    eprintln!("Time: {:?}", start.elapsed());

    println!("{}", answers.iter().join(" "));
}
