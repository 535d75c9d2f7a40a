//! The bit/byte reversal engine.
//!
//! Every reversal is all-or-nothing: per-segment results are collected
//! before a new series is assembled, so a failing segment surfaces its
//! `IncompatibleRange` error without any partial result escaping.

use adra_common::Result;

use crate::segment::Segment;
use crate::series::SegmentSeries;

impl SegmentSeries {
    /// New series with the segment order reversed. Segment values are
    /// untouched, so this always succeeds, and applying it twice yields
    /// a series equal to the original.
    pub fn reverse_segments(&self) -> SegmentSeries {
        let segments: Vec<Segment> = self.segment_slice().iter().rev().copied().collect();
        SegmentSeries::from_parts(self.family(), segments.into(), self.prefix_length())
    }

    /// New series with the segment order reversed and the bits of every
    /// segment reversed — across each whole segment, or within each byte
    /// when `per_byte` is set.
    ///
    /// Fails with `IncompatibleRange` when any segment's range does not
    /// reverse into a contiguous range.
    pub fn reverse_bits(&self, per_byte: bool) -> Result<SegmentSeries> {
        let segments = self
            .segment_slice()
            .iter()
            .rev()
            .map(|s| s.reverse_bits(per_byte))
            .collect::<Result<Vec<_>>>()?;
        Ok(SegmentSeries::from_parts(
            self.family(),
            segments.into(),
            self.prefix_length(),
        ))
    }

    /// New series with the byte order of the whole series reversed:
    /// segment order reversed and bytes reversed within each segment.
    ///
    /// Series with single-byte segments always succeed.
    pub fn reverse_bytes(&self) -> Result<SegmentSeries> {
        let segments = self
            .segment_slice()
            .iter()
            .rev()
            .map(|s| s.reverse_bytes())
            .collect::<Result<Vec<_>>>()?;
        Ok(SegmentSeries::from_parts(
            self.family(),
            segments.into(),
            self.prefix_length(),
        ))
    }

    /// New series with the bytes reversed within each segment, keeping
    /// the segment order.
    pub fn reverse_bytes_per_segment(&self) -> Result<SegmentSeries> {
        let segments = self
            .segment_slice()
            .iter()
            .map(|s| s.reverse_bytes())
            .collect::<Result<Vec<_>>>()?;
        Ok(SegmentSeries::from_parts(
            self.family(),
            segments.into(),
            self.prefix_length(),
        ))
    }
}
