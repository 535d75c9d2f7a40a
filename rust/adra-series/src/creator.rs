//! The validating builder — the only public way to assemble a series
//! from raw values.
//!
//! Validation happens once, here: per-segment bounds against the family
//! width, and prefix legality against the total bit span. The
//! transformation engines assume these invariants and never re-check
//! them.

use adra_common::{Result, verify_arg};

use crate::family::Family;
use crate::segment::Segment;
use crate::series::SegmentSeries;

/// Builder for [`SegmentSeries`] values.
///
/// ```
/// use adra_series::{Family, SeriesBuilder};
///
/// let series = SeriesBuilder::new(Family::ipv4())
///     .value(10)
///     .range(0, 255)
///     .value(0)
///     .value(1)
///     .build()
///     .unwrap();
/// assert_eq!(series.segment_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    family: Family,
    segments: Vec<(u64, u64)>,
    prefix_len: Option<u32>,
}

impl SeriesBuilder {
    pub fn new(family: Family) -> SeriesBuilder {
        SeriesBuilder {
            family,
            segments: Vec::new(),
            prefix_len: None,
        }
    }

    /// Appends a single-valued segment.
    pub fn value(self, value: u64) -> SeriesBuilder {
        self.range(value, value)
    }

    /// Appends a ranged segment.
    pub fn range(mut self, lower: u64, upper: u64) -> SeriesBuilder {
        self.segments.push((lower, upper));
        self
    }

    /// Assigns a prefix length.
    pub fn prefix_length(mut self, prefix_len: u32) -> SeriesBuilder {
        self.prefix_len = Some(prefix_len);
        self
    }

    /// Validates the accumulated parts and constructs the series.
    ///
    /// Fails with `InvalidArgument` on an unsupported family profile, an
    /// inverted or oversized segment range, or a prefix length past the
    /// total bit span.
    pub fn build(self) -> Result<SegmentSeries> {
        let family = self.family;
        verify_arg!(
            family.bits_per_segment,
            (8..=64).contains(&family.bits_per_segment) && family.bits_per_segment % 8 == 0
        );
        verify_arg!(family.radix, family.radix == 10 || family.radix == 16);
        let segments = self
            .segments
            .iter()
            .map(|&(lower, upper)| Segment::new(family.bits_per_segment, lower, upper))
            .collect::<Result<Vec<_>>>()?;
        let total_bits = segments.len() as u32 * family.bits_per_segment;
        if let Some(p) = self.prefix_len {
            verify_arg!(prefix_len, p <= total_bits);
        }
        Ok(SegmentSeries::from_parts(
            family,
            segments.into(),
            self.prefix_len,
        ))
    }
}

impl SegmentSeries {
    /// Series of single-valued segments.
    pub fn from_values(family: Family, values: &[u64]) -> Result<SegmentSeries> {
        values
            .iter()
            .fold(SeriesBuilder::new(family), |b, &v| b.value(v))
            .build()
    }

    /// Series of `(lower, upper)` ranged segments.
    pub fn from_ranges(family: Family, ranges: &[(u64, u64)]) -> Result<SegmentSeries> {
        ranges
            .iter()
            .fold(SeriesBuilder::new(family), |b, &(lo, hi)| b.range(lo, hi))
            .build()
    }
}
