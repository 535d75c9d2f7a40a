//! The segment-series container and its slicing engine.

use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use adra_common::{Result, error::Error};

use crate::family::Family;
use crate::segment::Segment;

/// An ordered, immutable run of equal-width segments, optionally
/// carrying a prefix length.
///
/// A `SegmentSeries` denotes the set of value tuples drawn independently
/// from each segment's `[lower, upper]` range. The optional prefix
/// length partitions the total bit span into leading "network" bits and
/// trailing "host" bits; segments straddling the boundary are split at
/// the bit level by the prefix algebra, never physically re-segmented.
///
/// Cloning is cheap: the segment storage is shared. Nothing is ever
/// mutated through that sharing — every transformation produces a fresh
/// series — so equality is plain value equality over the family, the
/// segments, and the prefix length.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SegmentSeries {
    family: Family,
    segments: Arc<[Segment]>,
    prefix_len: Option<u32>,
}

impl SegmentSeries {
    /// Assembles a series from validated parts. Callers (the creator and
    /// the transformation engines) are responsible for the invariants.
    pub(crate) fn from_parts(
        family: Family,
        segments: Arc<[Segment]>,
        prefix_len: Option<u32>,
    ) -> SegmentSeries {
        debug_assert!(
            segments
                .iter()
                .all(|s| s.bit_width() == family.bits_per_segment)
        );
        debug_assert!(
            prefix_len.is_none_or(|p| p <= segments.len() as u32 * family.bits_per_segment)
        );
        SegmentSeries {
            family,
            segments,
            prefix_len,
        }
    }

    /// The family profile this series was created under.
    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Number of segments in the series.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Bits per segment; equal across the whole series.
    #[inline]
    pub fn bits_per_segment(&self) -> u32 {
        self.family.bits_per_segment
    }

    /// Bytes per segment; segments are a whole number of bytes.
    #[inline]
    pub fn bytes_per_segment(&self) -> u32 {
        self.family.bytes_per_segment()
    }

    /// Total bit span of the series.
    #[inline]
    pub fn bit_count(&self) -> u32 {
        self.segment_count() as u32 * self.bits_per_segment()
    }

    /// Total byte span of the series.
    #[inline]
    pub fn byte_count(&self) -> u32 {
        self.segment_count() as u32 * self.bytes_per_segment()
    }

    /// The prefix length, when one is assigned.
    #[inline]
    pub fn prefix_length(&self) -> Option<u32> {
        self.prefix_len
    }

    /// True when any segment ranges over more than one value.
    pub fn is_multiple(&self) -> bool {
        self.segments.iter().any(|s| !s.is_single_value())
    }

    /// Number of distinct value tuples the series denotes, saturating at
    /// `u128::MAX`. The empty series denotes exactly one (empty) tuple.
    pub fn value_count(&self) -> u128 {
        self.segments
            .iter()
            .fold(1u128, |acc, s| acc.saturating_mul(s.value_count()))
    }

    /// The segment at `index`.
    pub fn segment(&self, index: usize) -> Result<Segment> {
        self.segments
            .get(index)
            .copied()
            .ok_or_else(|| Error::index_out_of_range(index, self.segment_count()))
    }

    /// All segments, freshly allocated. Prefer [`segment`](Self::segment)
    /// and [`segment_count`](Self::segment_count) when iterating.
    pub fn segments(&self) -> Vec<Segment> {
        self.segments.to_vec()
    }

    /// Read-only view of the shared segment storage.
    pub(crate) fn segment_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Shared handle to the segment storage.
    pub(crate) fn segment_storage(&self) -> Arc<[Segment]> {
        Arc::clone(&self.segments)
    }

    /// Copies every segment into `dest`, which must hold at least
    /// [`segment_count`](Self::segment_count) elements.
    pub fn segments_into(&self, dest: &mut [Segment]) -> Result<()> {
        let required = self.segment_count();
        if dest.len() < required {
            return Err(Error::insufficient_capacity(required, dest.len()));
        }
        dest[..required].copy_from_slice(&self.segments);
        Ok(())
    }

    /// Copies segments `[start, end)` into `dest` starting at `offset`.
    ///
    /// Bounds are checked up front; nothing is written on failure.
    pub fn segments_range_into(
        &self,
        start: usize,
        end: usize,
        dest: &mut [Segment],
        offset: usize,
    ) -> Result<()> {
        if start > end {
            return Err(Error::index_out_of_range(start, end));
        }
        if end > self.segment_count() {
            return Err(Error::index_out_of_range(end, self.segment_count()));
        }
        let required = end - start;
        let available = dest.len().saturating_sub(offset);
        if available < required {
            return Err(Error::insufficient_capacity(required, available));
        }
        dest[offset..offset + required].copy_from_slice(&self.segments[start..end]);
        Ok(())
    }

    /// Returns the section of this series covering the given segment
    /// range, e.g. `series.section(1..3)` or `series.section(2..)`.
    ///
    /// A prefix length is carried over re-anchored to the section's bit
    /// window: clamped to `[0, section_bits]` after subtracting the bits
    /// sliced off the front.
    pub fn section<R: RangeBounds<usize>>(&self, range: R) -> Result<SegmentSeries> {
        let count = self.segment_count();
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n + 1,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => count,
        };
        if start > end {
            return Err(Error::index_out_of_range(start, end));
        }
        if end > count {
            return Err(Error::index_out_of_range(end, count));
        }
        let bps = self.bits_per_segment();
        let section_bits = (end - start) as u32 * bps;
        let prefix = self
            .prefix_len
            .map(|p| p.saturating_sub(start as u32 * bps).min(section_bits));
        Ok(SegmentSeries::from_parts(
            self.family,
            self.segments[start..end].into(),
            prefix,
        ))
    }

    /// Projects every segment to its lower bound. Returns a value equal
    /// to `self` when every segment is already single-valued.
    pub fn lower(&self) -> SegmentSeries {
        if !self.is_multiple() {
            return self.clone();
        }
        self.map_segments(|s| Segment::unchecked(s.bit_width(), s.lower(), s.lower()))
    }

    /// Projects every segment to its upper bound. Returns a value equal
    /// to `self` when every segment is already single-valued.
    pub fn upper(&self) -> SegmentSeries {
        if !self.is_multiple() {
            return self.clone();
        }
        self.map_segments(|s| Segment::unchecked(s.bit_width(), s.upper(), s.upper()))
    }

    /// Lazily enumerates every concrete value tuple in the series as a
    /// single-valued series, most significant segment varying slowest.
    pub fn iter(&self) -> crate::iter::SeriesValueIter {
        crate::iter::SeriesValueIter::new(self)
    }

    /// Like [`iter`](Self::iter), but yields rows of degenerate segments
    /// instead of whole series.
    pub fn segments_iter(&self) -> crate::iter::SeriesSegmentsIter {
        crate::iter::SeriesSegmentsIter::new(self)
    }

    /// New series with the same segments and the given prefix metadata.
    pub(crate) fn with_prefix(&self, prefix_len: Option<u32>) -> SegmentSeries {
        SegmentSeries {
            family: self.family,
            segments: Arc::clone(&self.segments),
            prefix_len,
        }
    }

    /// New series with every segment transformed, keeping the prefix.
    pub(crate) fn map_segments(&self, f: impl FnMut(&Segment) -> Segment) -> SegmentSeries {
        let segments: Vec<Segment> = self.segments.iter().map(f).collect();
        SegmentSeries {
            family: self.family,
            segments: segments.into(),
            prefix_len: self.prefix_len,
        }
    }
}

impl std::fmt::Debug for SegmentSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.segments.iter()).finish()?;
        if let Some(p) = self.prefix_len {
            write!(f, "/{p}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    use super::SegmentSeries;
    use crate::creator::SeriesBuilder;
    use crate::family::Family;

    /// Wire shape: raw bounds plus the family, revalidated through the
    /// builder on the way back in.
    #[derive(Serialize, Deserialize)]
    struct SeriesRepr {
        family: Family,
        segments: Vec<(u64, u64)>,
        prefix_length: Option<u32>,
    }

    impl Serialize for SegmentSeries {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            SeriesRepr {
                family: self.family,
                segments: self.segments.iter().map(|s| s.value_range()).collect(),
                prefix_length: self.prefix_len,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for SegmentSeries {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = SeriesRepr::deserialize(deserializer)?;
            let mut builder = SeriesBuilder::new(repr.family);
            for (lower, upper) in repr.segments {
                builder = builder.range(lower, upper);
            }
            if let Some(p) = repr.prefix_length {
                builder = builder.prefix_length(p);
            }
            builder.build().map_err(de::Error::custom)
        }
    }
}
