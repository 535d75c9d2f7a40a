//! Lazy enumeration of the concrete values in a series.
//!
//! Enumeration is an odometer over the per-segment ranges: a vector of
//! current values, incremented from the least significant (last) segment
//! so the most significant segment varies slowest. The cursor is plain
//! state — re-creating the iterator restarts the enumeration, and the
//! index space can be partitioned externally for parallel walks.

use std::sync::Arc;

use crate::family::Family;
use crate::segment::Segment;
use crate::series::SegmentSeries;

/// The shared odometer cursor.
struct Odometer {
    segments: Arc<[Segment]>,
    cursor: Vec<u64>,
    remaining: u128,
}

impl Odometer {
    fn new(series: &SegmentSeries) -> Odometer {
        let segments = series.segment_storage();
        let cursor = segments.iter().map(|s| s.lower()).collect();
        Odometer {
            cursor,
            remaining: series.value_count(),
            segments,
        }
    }

    /// Yields the current row and steps the cursor.
    fn advance(&mut self) -> Option<Vec<u64>> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let row = self.cursor.clone();
        for slot in (0..self.cursor.len()).rev() {
            if self.cursor[slot] < self.segments[slot].upper() {
                self.cursor[slot] += 1;
                break;
            }
            self.cursor[slot] = self.segments[slot].lower();
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining <= usize::MAX as u128 {
            (self.remaining as usize, Some(self.remaining as usize))
        } else {
            (usize::MAX, None)
        }
    }
}

/// Iterator over every concrete value tuple of a series, yielding each
/// as a single-valued series. Elements carry no prefix length.
///
/// Created by [`SegmentSeries::iter`].
pub struct SeriesValueIter {
    family: Family,
    odometer: Odometer,
}

impl SeriesValueIter {
    pub(crate) fn new(series: &SegmentSeries) -> SeriesValueIter {
        SeriesValueIter {
            family: series.family(),
            odometer: Odometer::new(series),
        }
    }
}

impl Iterator for SeriesValueIter {
    type Item = SegmentSeries;

    fn next(&mut self) -> Option<SegmentSeries> {
        let bits = self.family.bits_per_segment;
        let row = self.odometer.advance()?;
        let segments: Vec<Segment> = row
            .into_iter()
            .map(|v| Segment::unchecked(bits, v, v))
            .collect();
        Some(SegmentSeries::from_parts(self.family, segments.into(), None))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.odometer.size_hint()
    }
}

/// Iterator over every concrete value tuple of a series, yielding rows
/// of degenerate segments.
///
/// Created by [`SegmentSeries::segments_iter`].
pub struct SeriesSegmentsIter {
    bits_per_segment: u32,
    odometer: Odometer,
}

impl SeriesSegmentsIter {
    pub(crate) fn new(series: &SegmentSeries) -> SeriesSegmentsIter {
        SeriesSegmentsIter {
            bits_per_segment: series.bits_per_segment(),
            odometer: Odometer::new(series),
        }
    }
}

impl Iterator for SeriesSegmentsIter {
    type Item = Vec<Segment>;

    fn next(&mut self) -> Option<Vec<Segment>> {
        let bits = self.bits_per_segment;
        let row = self.odometer.advance()?;
        Some(
            row.into_iter()
                .map(|v| Segment::unchecked(bits, v, v))
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.odometer.size_hint()
    }
}
