pub mod mo;
pub mod naive;

pub use mo::MoSweep;
pub use naive::NaiveScan;

use thiserror::Error;

/// Answer reported when no value in the range reaches the threshold.
/// Arrays that use -1 as a real value collide with it; callers that care
/// must remap their values.
pub const NONE: i64 = -1;

/// One range-mode query: bounds are 0-based and inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub left: usize,
    pub right: usize,
    /// Minimum number of occurrences the answer must have. At least 1.
    pub threshold: usize,
}

impl Query {
    pub fn new(left: usize, right: usize, threshold: usize) -> Self {
        Self {
            left,
            right,
            threshold,
        }
    }
}

/// A rejected batch. One offending query fails the whole call; no partial
/// results are produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("query {idx}: bounds {left}..={right} are inverted")]
    InvertedBounds { idx: usize, left: usize, right: usize },
    #[error("query {idx}: right bound {right} is out of bounds for an array of length {len}")]
    OutOfBounds { idx: usize, right: usize, len: usize },
    #[error("query {idx}: threshold must be at least 1")]
    ZeroThreshold { idx: usize },
}

/// Threshold range-mode query: the most frequent value of a sub-range among
/// those occurring at least `threshold` times, smallest value on ties,
/// [`NONE`] when nothing qualifies.
pub trait RangeMode {
    fn new(a: &[i64]) -> Self;

    /// One answer per query, in query order.
    ///
    /// Assumes validated queries; see [`resolve`] for the checked entry
    /// point. Out-of-range bounds panic.
    fn resolve(&self, queries: &[Query]) -> Vec<i64>;
}

/// Validate `queries` against `a`, then answer them with strategy `R`.
pub fn resolve<R: RangeMode>(a: &[i64], queries: &[Query]) -> Result<Vec<i64>, QueryError> {
    validate(a.len(), queries)?;
    Ok(R::new(a).resolve(queries))
}

fn validate(len: usize, queries: &[Query]) -> Result<(), QueryError> {
    for (idx, q) in queries.iter().enumerate() {
        if q.left > q.right {
            return Err(QueryError::InvertedBounds {
                idx,
                left: q.left,
                right: q.right,
            });
        }
        if q.right >= len {
            return Err(QueryError::OutOfBounds {
                idx,
                right: q.right,
                len,
            });
        }
        if q.threshold == 0 {
            return Err(QueryError::ZeroThreshold { idx });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    /// Answer a single query by full rescan, quadratic in the range length.
    fn reference(a: &[i64], q: &Query) -> i64 {
        let window = &a[q.left..=q.right];
        let mut best = NONE;
        let mut best_count = 0;
        for &x in window {
            let count = window.iter().filter(|&&y| y == x).count();
            if count >= q.threshold && (count > best_count || (count == best_count && x < best)) {
                best = x;
                best_count = count;
            }
        }
        best
    }

    fn random_queries(n: usize, how_many: usize) -> Vec<Query> {
        (0..how_many)
            .map(|_| {
                let left = rand::random::<usize>() % n;
                let right = left + rand::random::<usize>() % (n - left);
                let threshold = 1 + rand::random::<usize>() % (right - left + 2);
                Query::new(left, right, threshold)
            })
            .collect()
    }

    fn test_mode<R: RangeMode>() {
        for n in (1..10).chain((50..400).step_by(100)) {
            let a = (0..n)
                .map(|_| (rand::random::<u8>() % 6) as i64)
                .collect::<Vec<_>>();
            let r = R::new(&a);
            let queries = random_queries(n, 200);
            let got = r.resolve(&queries);
            assert_eq!(got.len(), queries.len());
            // Pure: a second pass must not differ.
            assert_eq!(got, r.resolve(&queries));
            for (q, &ans) in std::iter::zip(&queries, &got) {
                assert_eq!(ans, reference(&a, q), "Failure for n={n} query {q:?}.");
            }
        }
    }

    #[test]
    fn naive_scan() {
        test_mode::<NaiveScan>();
    }
    #[test]
    fn mo_sweep() {
        test_mode::<MoSweep>();
    }

    #[test]
    fn strategies_agree() {
        for _ in 0..10 {
            let n = 200;
            let a = (0..n)
                .map(|_| (rand::random::<u8>() % 4) as i64)
                .collect::<Vec<_>>();
            let queries = random_queries(n, 300);
            assert_eq!(
                NaiveScan::new(&a).resolve(&queries),
                MoSweep::new(&a).resolve(&queries),
            );
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let n = 300;
        let a = (0..n)
            .map(|_| (rand::random::<u8>() % 6) as i64)
            .collect::<Vec<_>>();
        let queries = random_queries(n, 500);
        let r = NaiveScan::new(&a);
        assert_eq!(r.par_resolve(&queries), r.resolve(&queries));
    }

    #[test]
    fn single_qualifier() {
        let r = NaiveScan::new(&[1, 2, 2, 3]);
        assert_eq!(r.resolve(&[Query::new(0, 3, 2)]), vec![2]);
    }

    #[test]
    fn tie_prefers_smaller_value() {
        let queries = [Query::new(0, 3, 2)];
        assert_eq!(NaiveScan::new(&[1, 1, 2, 2]).resolve(&queries), vec![1]);
        assert_eq!(MoSweep::new(&[1, 1, 2, 2]).resolve(&queries), vec![1]);
        // Scan order must not matter.
        assert_eq!(NaiveScan::new(&[2, 2, 1, 1]).resolve(&queries), vec![1]);
        assert_eq!(MoSweep::new(&[2, 2, 1, 1]).resolve(&queries), vec![1]);
    }

    #[test]
    fn single_element_range() {
        let r = NaiveScan::new(&[5]);
        assert_eq!(
            r.resolve(&[Query::new(0, 0, 1), Query::new(0, 0, 2)]),
            vec![5, NONE]
        );
    }

    #[test]
    fn threshold_up_to_range_length() {
        let queries = [Query::new(0, 4, 3), Query::new(0, 4, 4)];
        assert_eq!(NaiveScan::new(&[4, 4, 4, 1, 1]).resolve(&queries), vec![4, NONE]);
        assert_eq!(MoSweep::new(&[4, 4, 4, 1, 1]).resolve(&queries), vec![4, NONE]);
    }

    #[test]
    fn all_elements_identical() {
        let r = MoSweep::new(&[9, 9, 9, 9]);
        assert_eq!(
            r.resolve(&[Query::new(0, 3, 4), Query::new(0, 3, 5)]),
            vec![9, NONE]
        );
    }

    #[test]
    fn empty_batch() {
        assert_eq!(MoSweep::new(&[1, 2, 3]).resolve(&[]), Vec::<i64>::new());
        assert_eq!(resolve::<NaiveScan>(&[1, 2, 3], &[]), Ok(vec![]));
    }

    #[test]
    fn rejects_bad_queries() {
        let a = [1, 2, 3];
        assert_eq!(
            resolve::<NaiveScan>(&a, &[Query::new(2, 1, 1)]),
            Err(QueryError::InvertedBounds {
                idx: 0,
                left: 2,
                right: 1
            })
        );
        // A later offending query still fails the whole call.
        assert_eq!(
            resolve::<NaiveScan>(&a, &[Query::new(0, 2, 1), Query::new(1, 3, 1)]),
            Err(QueryError::OutOfBounds {
                idx: 1,
                right: 3,
                len: 3
            })
        );
        assert_eq!(
            resolve::<MoSweep>(&a, &[Query::new(0, 0, 0)]),
            Err(QueryError::ZeroThreshold { idx: 0 })
        );
    }
}
