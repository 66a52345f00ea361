//! Cumulative road distances along a bus route.
//!
//! Travel between any two stops of a route is needed for every ordered pair
//! (i, j) with i < j. Summing each pair from scratch is cubic in the route
//! length; instead we keep running prefix sums, so each pair costs O(1).

use crate::domain::StopId;

use super::Catalogue;

/// Running forward and reverse distances along an ordered stop sequence.
///
/// `forward[k]` is the road distance from stop 0 to stop k travelling
/// forward. `reverse[k]` is the distance from stop k back to stop 0
/// travelling against the route direction.
#[derive(Debug, Clone)]
pub struct CumulativeDistances {
    forward: Vec<u64>,
    reverse: Vec<u64>,
}

impl CumulativeDistances {
    /// Accumulate distances along `stops` using the catalogue's lookup.
    pub fn along(catalogue: &Catalogue, stops: &[StopId]) -> Self {
        let mut forward = Vec::with_capacity(stops.len());
        let mut reverse = Vec::with_capacity(stops.len());
        let (mut fwd, mut rev) = (0u64, 0u64);

        if !stops.is_empty() {
            forward.push(0);
            reverse.push(0);
        }
        for pair in stops.windows(2) {
            fwd += u64::from(catalogue.distance(pair[0], pair[1]));
            rev += u64::from(catalogue.distance(pair[1], pair[0]));
            forward.push(fwd);
            reverse.push(rev);
        }

        Self { forward, reverse }
    }

    /// Number of stops covered.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Road distance riding forward from stop `from` to stop `to`. `None`
    /// unless `from <= to < len`.
    pub fn forward(&self, from: usize, to: usize) -> Option<u64> {
        self.forward.get(to)?.checked_sub(*self.forward.get(from)?)
    }

    /// Road distance riding backward from stop `to` to stop `from`. `None`
    /// unless `from <= to < len`.
    pub fn reverse(&self, from: usize, to: usize) -> Option<u64> {
        self.reverse.get(to)?.checked_sub(*self.reverse.get(from)?)
    }

    /// Forward distance over the whole sequence.
    pub fn total_forward(&self) -> u64 {
        self.forward.last().copied().unwrap_or(0)
    }

    /// Reverse distance over the whole sequence.
    pub fn total_reverse(&self) -> u64 {
        self.reverse.last().copied().unwrap_or(0)
    }

    /// Iterate every window (i, j) with i < j, in row-major order.
    pub fn windows(&self) -> SegmentWindows<'_> {
        SegmentWindows {
            distances: self,
            start: 0,
            end: 0,
        }
    }
}

/// A contiguous stretch of a route between stop positions `from < to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentWindow {
    pub from: usize,
    pub to: usize,
    /// Road meters riding forward from `from` to `to`.
    pub forward_m: u64,
    /// Road meters riding backward from `to` to `from`.
    pub reverse_m: u64,
}

impl SegmentWindow {
    /// Number of stop-to-stop hops in this window.
    pub fn span_count(&self) -> usize {
        self.to - self.from
    }
}

/// Iterator over all route windows, see [`CumulativeDistances::windows`].
pub struct SegmentWindows<'a> {
    distances: &'a CumulativeDistances,
    start: usize,
    end: usize,
}

impl Iterator for SegmentWindows<'_> {
    type Item = SegmentWindow;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.distances.len();
        self.end += 1;
        if self.end >= len {
            self.start += 1;
            self.end = self.start + 1;
            if self.end >= len {
                return None;
            }
        }

        Some(SegmentWindow {
            from: self.start,
            to: self.end,
            forward_m: self.distances.forward(self.start, self.end)?,
            reverse_m: self.distances.reverse(self.start, self.end)?,
        })
    }
}
