use std::time::Duration;

use modeq::{MoSweep, NaiveScan, Query, RangeMode};

fn run<R: RangeMode>(a: &[i64], queries: &[Query]) -> (Vec<i64>, Duration) {
    let start = std::time::Instant::now();
    let out = R::new(a).resolve(queries);
    (out, start.elapsed())
}

fn main() {
    for n in [1000, 10000, 100000] {
        let a = (0..n)
            .map(|_| (rand::random::<u16>() % 64) as i64)
            .collect::<Vec<_>>();
        let queries = (0..n / 2)
            .map(|_| {
                let left = rand::random::<usize>() % n;
                let right = left + rand::random::<usize>() % (n - left);
                Query::new(left, right, 1 + rand::random::<usize>() % 4)
            })
            .collect::<Vec<_>>();

        let (naive, nt) = run::<NaiveScan>(&a, &queries);
        let (sweep, st) = run::<MoSweep>(&a, &queries);
        assert_eq!(naive, sweep);
        eprintln!("n = {}\n naive: {:>10?}\n sweep: {:>10?}", n, nt, st);
    }
}
