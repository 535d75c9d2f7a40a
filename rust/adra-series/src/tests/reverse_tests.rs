use adra_common::error::ErrorKind;

use crate::family::Family;
use crate::series::SegmentSeries;
use crate::tests::{v4, v4_prefixed, v6};

#[test]
fn test_reverse_segments() {
    let series = v4(&[(10, 10), (0, 255), (0, 0), (1, 1)]);
    assert_eq!(
        series.reverse_segments(),
        v4(&[(1, 1), (0, 0), (0, 255), (10, 10)])
    );
}

#[test]
fn test_reverse_segments_involution() {
    let cases = [
        v4(&[]),
        v4(&[(7, 7)]),
        v4(&[(10, 10), (0, 255), (0, 0), (1, 1)]),
        v4_prefixed(&[(10, 10), (20, 20), (0, 255)], 16),
    ];
    for series in cases {
        assert_eq!(series.reverse_segments().reverse_segments(), series);
    }
}

#[test]
fn test_reverse_bits_values() {
    let series = v4(&[(1, 1), (2, 2)]);
    // segment order flips and each value bit-reverses
    assert_eq!(series.reverse_bits(false).unwrap(), v4(&[(64, 64), (128, 128)]));
}

#[test]
fn test_reverse_bits_double_apply() {
    let cases = [
        v4(&[(10, 10), (0, 255), (0, 0), (1, 1)]),
        v6(&[(0x2001, 0x2001), (0, 0xffff)]),
        v4(&[(1, 254), (0, 255)]),
    ];
    for series in cases {
        for per_byte in [false, true] {
            let twice = series
                .reverse_bits(per_byte)
                .unwrap()
                .reverse_bits(per_byte)
                .unwrap();
            assert_eq!(twice, series);
        }
    }
}

#[test]
fn test_reverse_bits_failure_is_atomic() {
    // last segment is irreversible; the whole operation fails
    let series = v4(&[(1, 1), (0, 255), (5, 10)]);
    let err = series.reverse_bits(false).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::IncompatibleRange { lower: 5, upper: 10 }
    ));
}

#[test]
fn test_reverse_bytes_across_series() {
    // single-byte segments: byte reversal is pure segment reversal
    let series = v4(&[(0x12, 0x12), (0x34, 0x34)]);
    assert_eq!(
        series.reverse_bytes().unwrap(),
        v4(&[(0x34, 0x34), (0x12, 0x12)])
    );

    // multi-byte segments: order flips and bytes swap within segments
    let series = v6(&[(0x1234, 0x1234), (0x5678, 0x5678)]);
    assert_eq!(
        series.reverse_bytes().unwrap(),
        v6(&[(0x7856, 0x7856), (0x3412, 0x3412)])
    );
}

#[test]
fn test_reverse_bytes_per_segment() {
    let series = v6(&[(0x1234, 0x1234), (0x5678, 0x5678)]);
    assert_eq!(
        series.reverse_bytes_per_segment().unwrap(),
        v6(&[(0x3412, 0x3412), (0x7856, 0x7856)])
    );

    // single-byte segments are untouched
    let series = v4(&[(0x12, 0x12), (3, 200)]);
    assert_eq!(series.reverse_bytes_per_segment().unwrap(), series);
}

#[test]
fn test_reverse_bytes_range_propagation() {
    // a ranged multi-byte segment outside the reversible window fails
    let series = v6(&[(0x0100, 0x02ff)]);
    let err = series.reverse_bytes().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::IncompatibleRange { .. }));
    assert!(series.reverse_bytes_per_segment().is_err());

    // full-range and extreme-trimmed segments survive
    let series = v6(&[(0, 0xffff), (1, 0xfffe)]);
    assert_eq!(series.reverse_bytes_per_segment().unwrap(), series);
}

#[test]
fn test_reversal_preserves_prefix_metadata() {
    let series = v4_prefixed(&[(1, 1), (2, 2), (0, 255)], 16);
    assert_eq!(series.reverse_segments().prefix_length(), Some(16));
    assert_eq!(
        series.reverse_bits(false).unwrap().prefix_length(),
        Some(16)
    );
    assert_eq!(series.reverse_bytes().unwrap().prefix_length(), Some(16));
}

#[test]
fn test_reversal_randomized_involutions() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..200 {
        let count = rng.usize(0..=6);
        let ranges: Vec<(u64, u64)> = (0..count)
            .map(|_| {
                let a = rng.u64(0..=255);
                let b = rng.u64(0..=255);
                (a.min(b), a.max(b))
            })
            .collect();
        let series = SegmentSeries::from_ranges(Family::ipv4(), &ranges).unwrap();
        assert_eq!(series.reverse_segments().reverse_segments(), series);
        if let Ok(reversed) = series.reverse_bits(false) {
            assert_eq!(reversed.reverse_bits(false).unwrap(), series);
        }
        if let Ok(reversed) = series.reverse_bytes() {
            assert_eq!(reversed.reverse_bytes().unwrap(), series);
        }
    }
}
