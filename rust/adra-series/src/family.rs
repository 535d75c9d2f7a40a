//! Family capability profiles.
//!
//! A [`Family`] is the closed capability set a series is created under:
//! segment width, separator and radix for string rendering, the
//! compression grammar, and the zero-vs-keep policy applied when a prefix
//! length shrinks. The transformation engines consult individual
//! capabilities only — there is no family tag dispatch anywhere in the
//! core algorithms.

/// String compression grammar applied by `to_compressed_string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compression {
    /// The compressed form is the canonical form.
    None,
    /// The longest (leftmost on ties) run of zero-valued segments is
    /// elided into a doubled separator, `a::b` style.
    ZeroRun,
}

/// What happens to bits that move outside the prefix when a prefix
/// length is decreased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShrinkPolicy {
    /// Segment values are left untouched; only the metadata moves.
    Keep,
    /// Bits between the new and the old boundary are zeroed.
    ZeroHostBits,
}

/// The capability profile of an address family.
///
/// Profiles are plain data: the built-in constructors cover IPv4, IPv6
/// and MAC, and custom profiles can be assembled with struct-update
/// syntax. Segment widths must be a whole number of bytes; the series
/// builder enforces this (along with `radix`) at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Family {
    /// Width of every segment in a series of this family, in bits.
    pub bits_per_segment: u32,
    /// Separator between segment tokens in rendered strings.
    pub separator: char,
    /// Rendering radix for segment values: 10 or 16.
    pub radix: u32,
    /// Zero-pad rendered segment values to this many digits (0 = none).
    pub pad_to: usize,
    /// Compression grammar for the compressed string form.
    pub compression: Compression,
    /// Policy for bits that move outside a shrinking prefix.
    pub shrink_policy: ShrinkPolicy,
}

impl Family {
    /// IPv4: 8-bit segments, dotted decimal.
    pub const fn ipv4() -> Family {
        Family {
            bits_per_segment: 8,
            separator: '.',
            radix: 10,
            pad_to: 0,
            compression: Compression::None,
            shrink_policy: ShrinkPolicy::Keep,
        }
    }

    /// IPv6: 16-bit segments, colon-separated lowercase hex with
    /// zero-run compression.
    pub const fn ipv6() -> Family {
        Family {
            bits_per_segment: 16,
            separator: ':',
            radix: 16,
            pad_to: 0,
            compression: Compression::ZeroRun,
            shrink_policy: ShrinkPolicy::Keep,
        }
    }

    /// MAC: 8-bit segments, colon-separated two-digit lowercase hex.
    pub const fn mac() -> Family {
        Family {
            bits_per_segment: 8,
            separator: ':',
            radix: 16,
            pad_to: 2,
            compression: Compression::None,
            shrink_policy: ShrinkPolicy::Keep,
        }
    }

    /// Bytes per segment for this profile.
    pub const fn bytes_per_segment(&self) -> u32 {
        (self.bits_per_segment + 7) / 8
    }

    /// Largest value a single segment of this profile can hold.
    pub const fn max_segment_value(&self) -> u64 {
        crate::segment::max_value_for(self.bits_per_segment)
    }
}
