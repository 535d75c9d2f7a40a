//! Token production and string assembly.

use itertools::Itertools;

use adra_series::{Compression, Family, Segment, SegmentSeries};

/// String rendering operations on a series.
///
/// Provided as an extension trait so the rendering grammar stays in this
/// crate; the series itself carries only the family capabilities the
/// grammar consumes.
pub trait SeriesStrings {
    /// Per-segment tokens as they appear in the wildcard-bearing
    /// normalized string.
    fn segment_strings(&self) -> Vec<String>;

    /// The full, unambiguous rendering of the series.
    fn to_canonical_string(&self) -> String;

    /// The shortest rendering within the family's grammar.
    fn to_compressed_string(&self) -> String;
}

impl SeriesStrings for SegmentSeries {
    fn segment_strings(&self) -> Vec<String> {
        segment_strings(self)
    }

    fn to_canonical_string(&self) -> String {
        to_canonical_string(self)
    }

    fn to_compressed_string(&self) -> String {
        to_compressed_string(self)
    }
}

/// Renders one segment token: the value for a single-valued segment, a
/// `lo-hi` range token otherwise, `*` for the full range.
fn segment_token(segment: &Segment, family: &Family) -> String {
    if segment.is_full_range() && !segment.is_single_value() {
        return "*".to_string();
    }
    let (lower, upper) = segment.value_range();
    if segment.is_single_value() {
        format_value(lower, family)
    } else {
        format!(
            "{}-{}",
            format_value(lower, family),
            format_value(upper, family)
        )
    }
}

fn format_value(value: u64, family: &Family) -> String {
    let width = family.pad_to;
    match family.radix {
        16 => format!("{value:0width$x}"),
        _ => format!("{value:0width$}"),
    }
}

/// Per-segment tokens for `series`, in order.
pub fn segment_strings(series: &SegmentSeries) -> Vec<String> {
    let family = series.family();
    series
        .segments()
        .iter()
        .map(|s| segment_token(s, &family))
        .collect()
}

/// The canonical rendering: every segment token, the family separator,
/// and a `/p` suffix when a prefix length is assigned.
pub fn to_canonical_string(series: &SegmentSeries) -> String {
    let separator = series.family().separator;
    let mut out = segment_strings(series)
        .iter()
        .join(&separator.to_string());
    append_prefix(&mut out, series);
    out
}

/// The compressed rendering: the canonical form with the family's
/// compression grammar applied.
///
/// For `Compression::ZeroRun` families, the longest run of zero-valued
/// segments (leftmost on ties) collapses into a doubled separator.
pub fn to_compressed_string(series: &SegmentSeries) -> String {
    let family = series.family();
    let Some((start, len)) = (match family.compression {
        Compression::ZeroRun => longest_zero_run(series),
        Compression::None => None,
    }) else {
        return to_canonical_string(series);
    };
    let separator = family.separator.to_string();
    let tokens = segment_strings(series);
    let head = tokens[..start].join(&separator);
    let tail = tokens[start + len..].join(&separator);
    let mut out = format!("{head}{separator}{separator}{tail}");
    append_prefix(&mut out, series);
    out
}

fn append_prefix(out: &mut String, series: &SegmentSeries) {
    if let Some(p) = series.prefix_length() {
        out.push('/');
        out.push_str(&p.to_string());
    }
}

/// Finds the longest run of segments whose value is exactly zero,
/// preferring the leftmost among equals. `None` when no segment is a
/// zero single value.
fn longest_zero_run(series: &SegmentSeries) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start = 0;
    let mut run_len = 0;
    for (i, segment) in series.segments().iter().enumerate() {
        if segment.is_single_value() && segment.lower() == 0 {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if best.is_none_or(|(_, len)| run_len > len) {
                best = Some((run_start, run_len));
            }
        } else {
            run_len = 0;
        }
    }
    best
}
