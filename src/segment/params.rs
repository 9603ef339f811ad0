use super::SegmentError;
use std::ops::RangeInclusive;

/// Target, lower and upper bounds for segment size and overlap.
///
/// The candidate ranges always contain the target: sizes span
/// `min(target, min) ..= max(target, max)` and overlaps likewise. A bound
/// that excludes the target is silently widened to include it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentParams {
    pub target_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub target_overlap: usize,
    pub min_overlap: usize,
    pub max_overlap: usize,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            target_size: 10,
            min_size: 8,
            max_size: 12,
            target_overlap: 2,
            min_overlap: 2,
            max_overlap: 4,
        }
    }
}

impl SegmentParams {
    /// Parameters with no freedom around the targets.
    pub fn fixed(size: usize, overlap: usize) -> Self {
        Self {
            target_size: size,
            min_size: size,
            max_size: size,
            target_overlap: overlap,
            min_overlap: overlap,
            max_overlap: overlap,
        }
    }

    pub fn candidate_sizes(&self) -> RangeInclusive<usize> {
        self.target_size.min(self.min_size)..=self.target_size.max(self.max_size)
    }

    pub fn candidate_overlaps(&self) -> RangeInclusive<usize> {
        self.target_overlap.min(self.min_overlap)..=self.target_overlap.max(self.max_overlap)
    }

    /// Distance of a size/overlap pair from the targets.
    pub fn deviation(&self, size: usize, overlap: usize) -> usize {
        self.target_size.abs_diff(size) + self.target_overlap.abs_diff(overlap)
    }

    /// Checks the parts of the configuration that do not depend on the sequence.
    pub fn validate(&self) -> Result<(), SegmentError> {
        if self.target_size == 0 {
            return Err(SegmentError::config("target segment size must be at least 1"));
        }
        let sizes = self.candidate_sizes();
        let overlaps = self.candidate_overlaps();
        if overlaps.start() >= sizes.end() {
            return Err(SegmentError::config(format!(
                "every overlap in [{},{}] is at least as large as every size in [{},{}]",
                overlaps.start(),
                overlaps.end(),
                sizes.start(),
                sizes.end()
            )));
        }
        Ok(())
    }

    /// Checks that a sequence of `len` positions can be segmented.
    pub fn validate_len(&self, len: usize) -> Result<(), SegmentError> {
        if len == 0 {
            return Err(SegmentError::config("cannot segment an empty sequence"));
        }
        if len < self.target_size {
            return Err(SegmentError::config(format!(
                "sequence length {} is shorter than the target segment size {}",
                len, self.target_size
            )));
        }
        Ok(())
    }
}
