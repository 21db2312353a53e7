use freq::{CountBuckets, FreqTable};
use rdst::{RadixKey, RadixSort};

use crate::{Query, RangeMode, NONE};

/// Offline strategy: queries are reordered into sqrt(n)-sized blocks of
/// their left bound and a single window slides over the array, so a batch
/// costs O((n + q) sqrt(n)) table updates instead of a full rescan per
/// query. Answers are identical to [`crate::NaiveScan`], only throughput
/// differs.
pub struct MoSweep {
    a: Vec<i64>,
}

/// A query's position in sweep order: block of the left bound, then right
/// bound. The original index tags along to place the answer.
#[derive(Debug, Clone, Copy)]
struct SweepOrder {
    /// block << 32 | right
    key: u64,
    idx: u32,
}

/// Sort `SweepOrder` by the packed key.
impl RadixKey for SweepOrder {
    const LEVELS: usize = 8;
    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (self.key >> (level * 8)) as u8
    }
}

impl RangeMode for MoSweep {
    fn new(a: &[i64]) -> Self {
        Self { a: a.to_vec() }
    }

    fn resolve(&self, queries: &[Query]) -> Vec<i64> {
        if queries.is_empty() {
            return Vec::new();
        }
        let a = &self.a;
        // The packed sort key and the answer index are 32 bits each.
        assert!(a.len() <= u32::MAX as usize);
        assert!(queries.len() <= u32::MAX as usize);
        let block = a.len().isqrt().max(1);

        let mut order = queries
            .iter()
            .enumerate()
            .map(|(idx, q)| SweepOrder {
                key: ((q.left / block) as u64) << 32 | q.right as u64,
                idx: idx as u32,
            })
            .collect::<Vec<_>>();
        order
            .radix_sort_builder()
            .with_single_threaded_tuner()
            .sort();

        let mut table = FreqTable::new();
        let mut buckets = CountBuckets::new(a.len());
        // Current window, right-exclusive. Grows before it shrinks so it
        // never inverts between queries.
        let (mut wl, mut wr) = (0, 0);
        let mut out = vec![NONE; queries.len()];
        for SweepOrder { idx, .. } in order {
            let q = &queries[idx as usize];
            let (ql, qr) = (q.left, q.right + 1);
            while wr < qr {
                let c = table.add(a[wr]);
                buckets.promote(a[wr], c);
                wr += 1;
            }
            while wl > ql {
                wl -= 1;
                let c = table.add(a[wl]);
                buckets.promote(a[wl], c);
            }
            while wr > qr {
                wr -= 1;
                let c = table.remove(a[wr]);
                buckets.demote(a[wr], c);
            }
            while wl < ql {
                let c = table.remove(a[wl]);
                buckets.demote(a[wl], c);
                wl += 1;
            }
            if buckets.max_count() >= q.threshold {
                // The best qualifying count is the window maximum itself;
                // ties resolve by scanning that bucket for its minimum.
                out[idx as usize] = buckets.min_at_max().unwrap_or(NONE);
            }
        }
        out
    }
}
