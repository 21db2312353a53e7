use std::cmp::Reverse;

use freq::FreqTable;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{Query, RangeMode, NONE};

/// Rebuilds a fresh frequency table for every query.
/// O(right - left + 1) time and O(distinct values) space per query.
pub struct NaiveScan {
    a: Vec<i64>,
}

impl NaiveScan {
    fn answer(&self, q: &Query) -> i64 {
        let table = FreqTable::from_window(&self.a[q.left..=q.right]);
        best(&table, q.threshold)
    }

    /// Same answers as [`RangeMode::resolve`], with the queries spread over
    /// a thread pool. Queries are independent and the array is read-only,
    /// so each worker only builds its own table and fills its own output
    /// slot; the indexed collect keeps query order.
    pub fn par_resolve(&self, queries: &[Query]) -> Vec<i64> {
        queries.par_iter().map(|q| self.answer(q)).collect()
    }
}

impl RangeMode for NaiveScan {
    fn new(a: &[i64]) -> Self {
        Self { a: a.to_vec() }
    }

    fn resolve(&self, queries: &[Query]) -> Vec<i64> {
        queries.iter().map(|q| self.answer(q)).collect()
    }
}

/// Highest qualifying count wins, smallest value on ties. The table's
/// iteration order does not influence the result.
fn best(table: &FreqTable<i64>, threshold: usize) -> i64 {
    table
        .iter()
        .filter(|&(_, c)| c >= threshold)
        .max_by_key(|&(x, c)| (c, Reverse(x)))
        .map(|(x, _)| x)
        .unwrap_or(NONE)
}
