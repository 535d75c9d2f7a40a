//! Segmented address-range series.
//!
//! The central type is [`SegmentSeries`]: an ordered run of equal-width
//! [`Segment`]s, each holding a contiguous `[lower, upper]` value range,
//! optionally carrying a prefix length. A series can denote a single
//! address, a CIDR block, or an arbitrary per-segment range.
//!
//! Series are immutable values. Every transformation — slicing, bit/byte
//! reversal, prefix adjustment, lower/upper projection — returns a new
//! series (or a deterministic failure) and never mutates shared state, so
//! concurrent use requires no synchronization.
//!
//! Construction goes through the validating builder in [`creator`]; the
//! transformation engines assume validated inputs and never re-check the
//! series invariants.

pub mod creator;
pub mod family;
pub mod iter;
pub mod segment;
pub mod series;

mod prefix;
mod reverse;

#[cfg(test)]
mod tests;

pub use creator::SeriesBuilder;
pub use family::{Compression, Family, ShrinkPolicy};
pub use iter::{SeriesSegmentsIter, SeriesValueIter};
pub use segment::Segment;
pub use series::SegmentSeries;
