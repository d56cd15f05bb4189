//! Closed ranges of pixel ids.
//!
//! An area on the sky is handed to the index as pixel ranges rather than
//! individual ids: in the nested scheme a region decomposes into a handful of
//! contiguous runs.

use std::fmt;
use std::ops::RangeInclusive;

/// Pixel ids `first..=last`. A range with `first > last` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PixelRange {
    pub first: u64,
    pub last: u64,
}

impl PixelRange {
    #[inline]
    pub const fn new(first: u64, last: u64) -> Self {
        Self { first, last }
    }

    #[inline]
    pub const fn single(pixel: u64) -> Self {
        Self::new(pixel, pixel)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.first > self.last
    }

    #[inline]
    pub const fn contains(&self, pixel: u64) -> bool {
        self.first <= pixel && pixel <= self.last
    }

    /// Number of pixel ids covered.
    pub const fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.last - self.first + 1
        }
    }

    /// The range as `first..=last`, for use with `BTreeMap::range`.
    pub fn as_inclusive(&self) -> RangeInclusive<u64> {
        self.first..=self.last
    }
}

impl From<RangeInclusive<u64>> for PixelRange {
    fn from(range: RangeInclusive<u64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl fmt::Display for PixelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.first, self.last)
    }
}

/// Sorted, non-overlapping, non-adjacent pixel ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelRangeSet {
    ranges: Vec<PixelRange>,
}

impl PixelRangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from arbitrary ranges; empty ranges are dropped and
    /// overlapping or adjacent ones merged.
    pub fn from_ranges<I: IntoIterator<Item = PixelRange>>(ranges: I) -> Self {
        let mut sorted: Vec<PixelRange> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
        sorted.sort_unstable();

        let mut merged: Vec<PixelRange> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match merged.last_mut() {
                Some(prev) if range.first <= prev.last.saturating_add(1) => {
                    prev.last = prev.last.max(range.last);
                }
                _ => merged.push(range),
            }
        }
        Self { ranges: merged }
    }

    pub fn from_pixels<I: IntoIterator<Item = u64>>(pixels: I) -> Self {
        Self::from_ranges(pixels.into_iter().map(PixelRange::single))
    }

    pub fn contains(&self, pixel: u64) -> bool {
        let idx = self.ranges.partition_point(|r| r.last < pixel);
        self.ranges.get(idx).is_some_and(|r| r.contains(pixel))
    }

    /// Number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of pixel ids across all ranges.
    pub fn pixel_count(&self) -> u64 {
        self.ranges.iter().map(PixelRange::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PixelRange> {
        self.ranges.iter()
    }

    /// Every pixel id in ascending order.
    pub fn pixels(&self) -> impl Iterator<Item = u64> + '_ {
        self.ranges.iter().flat_map(PixelRange::as_inclusive)
    }

    pub fn as_slice(&self) -> &[PixelRange] {
        &self.ranges
    }
}

impl IntoIterator for PixelRangeSet {
    type Item = PixelRange;
    type IntoIter = std::vec::IntoIter<PixelRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelRangeSet {
    type Item = PixelRange;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, PixelRange>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter().copied()
    }
}

impl FromIterator<PixelRange> for PixelRangeSet {
    fn from_iter<I: IntoIterator<Item = PixelRange>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_basics() {
        let r = PixelRange::new(10, 12);
        assert_eq!(r.len(), 3);
        assert!(r.contains(10) && r.contains(12));
        assert!(!r.contains(13));
        assert_eq!(r.to_string(), "[10, 12]");
        assert_eq!(PixelRange::from(4..=6), PixelRange::new(4, 6));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let r = PixelRange::new(5, 4);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(!r.contains(4) && !r.contains(5));
    }

    #[test]
    fn test_from_pixels_merges_runs() {
        let set = PixelRangeSet::from_pixels([7, 3, 4, 5, 9, 8, 20]);
        assert_eq!(
            set.as_slice(),
            &[PixelRange::new(3, 5), PixelRange::new(7, 9), PixelRange::new(20, 20)]
        );
        assert_eq!(set.pixel_count(), 7);
        let all: Vec<u64> = set.pixels().collect();
        assert_eq!(all, vec![3, 4, 5, 7, 8, 9, 20]);
    }

    #[test]
    fn test_from_ranges_merges_overlap_and_drops_empty() {
        let set: PixelRangeSet = [
            PixelRange::new(10, 20),
            PixelRange::new(15, 30),
            PixelRange::new(31, 31),
            PixelRange::new(50, 40),
            PixelRange::new(0, 0),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.as_slice(), &[PixelRange::new(0, 0), PixelRange::new(10, 31)]);
    }

    #[test]
    fn test_merge_at_u64_max() {
        let set = PixelRangeSet::from_ranges([PixelRange::new(u64::MAX - 1, u64::MAX), PixelRange::single(u64::MAX)]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_contains() {
        let set = PixelRangeSet::from_ranges([PixelRange::new(3, 5), PixelRange::new(10, 10)]);
        for (pixel, expected) in [(2, false), (3, true), (5, true), (6, false), (10, true), (11, false)] {
            assert_eq!(set.contains(pixel), expected, "pixel {}", pixel);
        }
        assert!(!PixelRangeSet::new().contains(0));
    }
}
