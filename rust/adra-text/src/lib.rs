//! Canonical and compressed string rendering for segment series.
//!
//! The canonical form is the full, unambiguous rendering: one token per
//! segment in the family's radix, joined by the family separator, with
//! `-` range tokens, `*` for full-range segments, and a `/p` suffix when
//! a prefix length is assigned. The compressed form applies the family's
//! compression grammar on top — zero-run elision into a doubled
//! separator for families like IPv6 — and is otherwise identical.

pub mod render;

pub use render::{SeriesStrings, segment_strings, to_canonical_string, to_compressed_string};
