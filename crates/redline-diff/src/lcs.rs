//! Longest-common-subsequence engine shared by the line and word differencers.
//!
//! The DP table is filled bottom-up two rows at a time. When two neighbours
//! tie, the backtrack steps back on the `a` side first; callers rely on this
//! to get a stable visual diff, so it must not be changed to a
//! prefix/suffix-trimming variant (that can anchor repeated tokens
//! differently).
//!
//! The backtrack is a pure function of the table, so it can be replayed band
//! by band: split the `b` rows in half, compute the middle row, walk the
//! lower band back to the row where the path leaves it, then recurse into the
//! upper band from that column. Bands small enough for [`BAND_CELLS`] are
//! materialised and walked directly. Memory stays at one row per recursion
//! level plus one band, while the matches are exactly those of a full-table
//! backtrack.

use tracing::trace;

/// Largest band, in table cells, that is materialised in one piece.
const BAND_CELLS: usize = 1 << 22;

/// One matched token pair: `a[a_idx] == b[b_idx]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcsMatch {
    pub a_idx: usize,
    pub b_idx: usize,
}

impl LcsMatch {
    pub fn new(a_idx: usize, b_idx: usize) -> Self {
        Self { a_idx, b_idx }
    }
}

/// Compute a longest common subsequence of `a` and `b`.
///
/// Returns the matched index pairs in ascending order on both sides.
/// Runs in `O(|a| * |b|)` time with no size limit, so bound the inputs before
/// calling this on untrusted text. Working memory is `O(|a| * log |b|)`.
pub fn lcs<T: PartialEq>(a: &[T], b: &[T]) -> Vec<LcsMatch> {
    lcs_in_bands(a, b, BAND_CELLS)
}

fn lcs_in_bands<T: PartialEq>(a: &[T], b: &[T], band_cells: usize) -> Vec<LcsMatch> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let walk = Walk { a, b, band_cells };
    let mut matches = Vec::new();
    walk.band(&vec![0u32; a.len() + 1], 0, b.len(), a.len(), &mut matches);
    trace!(a = a.len(), b = b.len(), matches = matches.len(), "lcs computed");

    matches.reverse();
    matches
}

struct Walk<'s, T> {
    a: &'s [T],
    b: &'s [T],
    band_cells: usize,
}

impl<T: PartialEq> Walk<'_, T> {
    /// Backtrack from `(i, hi)` until the path reaches row `lo` or column 0.
    ///
    /// `top` is table row `lo`, at least `i + 1` wide. Matches are pushed in
    /// backtrack order; the column where the path leaves the band is returned.
    fn band(&self, top: &[u32], lo: usize, hi: usize, i: usize, out: &mut Vec<LcsMatch>) -> usize {
        if i == 0 || lo == hi {
            return i;
        }

        let rows = hi - lo;
        if rows == 1 || (rows + 1).saturating_mul(i + 1) <= self.band_cells {
            return self.walk_table(&top[..=i], lo, hi, out);
        }

        let mid = lo + rows / 2;
        let mid_row = self.advance(&top[..=i], lo, mid);
        let exit = self.band(&mid_row, mid, hi, i, out);
        self.band(top, lo, mid, exit, out)
    }

    /// Fill rows `from + 1 ..= to` from row `from`, keeping only two rows.
    fn advance(&self, row: &[u32], from: usize, to: usize) -> Vec<u32> {
        let mut prev = row.to_vec();
        let mut cur = vec![0u32; row.len()];
        for j in from + 1..=to {
            self.fill_row(&prev, &mut cur, j);
            std::mem::swap(&mut prev, &mut cur);
        }
        prev
    }

    fn fill_row(&self, prev: &[u32], cur: &mut [u32], j: usize) {
        cur[0] = 0;
        for i in 1..cur.len() {
            cur[i] = if self.a[i - 1] == self.b[j - 1] {
                prev[i - 1] + 1
            } else {
                prev[i].max(cur[i - 1])
            };
        }
    }

    /// Materialise rows `lo ..= hi` and backtrack through them.
    fn walk_table(&self, top: &[u32], lo: usize, hi: usize, out: &mut Vec<LcsMatch>) -> usize {
        let width = top.len();
        let mut cells = vec![0u32; width * (hi - lo + 1)];
        cells[..width].copy_from_slice(top);
        for j in lo + 1..=hi {
            let (prev, cur) = cells.split_at_mut((j - lo) * width);
            self.fill_row(&prev[(j - lo - 1) * width..], &mut cur[..width], j);
        }
        let get = |i: usize, j: usize| cells[(j - lo) * width + i];

        let (mut i, mut j) = (width - 1, hi);
        while i > 0 && j > lo {
            if self.a[i - 1] == self.b[j - 1] {
                out.push(LcsMatch::new(i - 1, j - 1));
                i -= 1;
                j -= 1;
            } else if get(i, j - 1) > get(i - 1, j) {
                j -= 1;
            } else {
                i -= 1;
            }
        }
        i
    }
}
