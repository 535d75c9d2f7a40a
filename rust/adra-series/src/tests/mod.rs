mod reverse_tests;

use crate::family::Family;
use crate::series::SegmentSeries;

/// IPv4-family series from `(lower, upper)` pairs.
pub(crate) fn v4(ranges: &[(u64, u64)]) -> SegmentSeries {
    SegmentSeries::from_ranges(Family::ipv4(), ranges).unwrap()
}

/// IPv6-family series from `(lower, upper)` pairs.
pub(crate) fn v6(ranges: &[(u64, u64)]) -> SegmentSeries {
    SegmentSeries::from_ranges(Family::ipv6(), ranges).unwrap()
}

/// IPv4-family series with a prefix length.
pub(crate) fn v4_prefixed(ranges: &[(u64, u64)], prefix: u32) -> SegmentSeries {
    ranges
        .iter()
        .fold(crate::SeriesBuilder::new(Family::ipv4()), |b, &(lo, hi)| {
            b.range(lo, hi)
        })
        .prefix_length(prefix)
        .build()
        .unwrap()
}
