//! The prefix algebra.
//!
//! The prefix length partitions a series' bit span into leading network
//! bits and trailing host bits. Growing the prefix zeroes the bits it
//! absorbs; shrinking consults the family's [`ShrinkPolicy`]; extending
//! past the last bit removes the prefix. All operations here are
//! infallible and return a fresh series.
//!
//! [`ShrinkPolicy`]: crate::family::ShrinkPolicy

use crate::family::ShrinkPolicy;
use crate::series::SegmentSeries;

impl SegmentSeries {
    /// Expands the host bits beyond the prefix to their full range,
    /// turning the series into the block for its prefix. Without a
    /// prefix length, returns a value equal to `self`.
    pub fn to_prefix_block(&self) -> SegmentSeries {
        let Some(p) = self.prefix_length() else {
            return self.clone();
        };
        let bps = self.bits_per_segment();
        let mut offset = 0u32;
        let result = self.map_segments(|seg| {
            let network_bits = p.saturating_sub(offset).min(bps);
            offset += bps;
            if network_bits == bps {
                *seg
            } else {
                seg.to_prefix_block(network_bits)
            }
        });
        debug_assert!(result.is_prefix_block());
        result
    }

    /// True when the series has a prefix length and its host bits span
    /// their full range in every segment.
    pub fn is_prefix_block(&self) -> bool {
        let Some(p) = self.prefix_length() else {
            return false;
        };
        let bps = self.bits_per_segment();
        self.segment_slice().iter().enumerate().all(|(i, seg)| {
            let network_bits = p.saturating_sub(i as u32 * bps).min(bps);
            seg.is_host_full(network_bits)
        })
    }

    /// Drops the prefix length. Pure metadata removal: segment values
    /// are never altered.
    pub fn remove_prefix_length(&self) -> SegmentSeries {
        self.with_prefix(None)
    }

    /// Moves the prefix boundary to the next (`extend`) or previous
    /// whole-segment boundary. A series without a prefix starts from its
    /// total bit span. Extending past the last segment removes the
    /// prefix entirely.
    pub fn adjust_prefix_by_segment(&self, extend: bool) -> SegmentSeries {
        let bps = self.bits_per_segment();
        let cur = self.prefix_length().unwrap_or_else(|| self.bit_count());
        let target = if extend {
            (cur / bps + 1) * bps
        } else if cur % bps == 0 {
            cur.saturating_sub(bps)
        } else {
            cur / bps * bps
        };
        self.reprefixed(target as i64)
    }

    /// Moves the prefix boundary by `delta` bits, clamping at zero and
    /// removing the prefix when it would pass the last bit.
    pub fn adjust_prefix_length(&self, delta: i32) -> SegmentSeries {
        let cur = self.prefix_length().unwrap_or_else(|| self.bit_count());
        self.reprefixed(cur as i64 + delta as i64)
    }

    /// Assigns the prefix length unconditionally. Growing zeroes the
    /// newly absorbed bits; shrinking follows the family's shrink
    /// policy; a length past the total bit span removes the prefix.
    pub fn set_prefix_length(&self, prefix_len: u32) -> SegmentSeries {
        self.reprefixed(prefix_len as i64)
    }

    /// Like [`set_prefix_length`](Self::set_prefix_length), except an
    /// existing prefix is never increased: when the current prefix is
    /// already `<= prefix_len`, returns a value equal to `self`.
    pub fn apply_prefix_length(&self, prefix_len: u32) -> SegmentSeries {
        match self.prefix_length() {
            Some(p) if p <= prefix_len => self.clone(),
            _ => self.set_prefix_length(prefix_len),
        }
    }

    /// Moves the prefix boundary to `target` (series bit coordinates;
    /// clamped below at zero), applying the grow/shrink bit rules
    /// relative to the current boundary.
    fn reprefixed(&self, target: i64) -> SegmentSeries {
        let total = self.bit_count();
        let cur = self.prefix_length().unwrap_or(total);
        let new = target.max(0) as u32;
        if new >= cur {
            let zeroed = self.zeroed_bits(cur, new.min(total));
            zeroed.with_prefix((new <= total).then_some(new))
        } else {
            let zeroed = match self.family().shrink_policy {
                ShrinkPolicy::ZeroHostBits => self.zeroed_bits(new, cur),
                ShrinkPolicy::Keep => self.clone(),
            };
            zeroed.with_prefix(Some(new))
        }
    }

    /// New series with bit positions `[from, to)` zeroed, prefix
    /// metadata unchanged.
    fn zeroed_bits(&self, from: u32, to: u32) -> SegmentSeries {
        if from >= to {
            return self.clone();
        }
        let bps = self.bits_per_segment();
        let mut offset = 0u32;
        self.map_segments(|seg| {
            let a = from.saturating_sub(offset).min(bps);
            let b = to.saturating_sub(offset).min(bps);
            offset += bps;
            if a >= b { *seg } else { seg.zeroed_bit_range(a, b) }
        })
    }
}
