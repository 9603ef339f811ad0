//! Overlapping segmentation of labelled sequences.
//!
//! A sequence is split into a chain of windows whose sizes and overlaps stay
//! close to the configured targets while avoiding boundaries inside runs of
//! identically labelled significant positions.

mod builder;
mod error;
mod labels;
mod params;
mod path;
mod scoreboard;

pub use builder::{build_segments, Segment};
pub use error::SegmentError;
pub use labels::{derive_codes, LabelCode, LabelSet, NOT_SIGNIFICANT, SIGNIFICANT};
pub use params::SegmentParams;
pub use path::reconstruct_path;
pub use scoreboard::{Cell, Link, ScoreBoard};

use std::hash::Hash;

#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation<'a, T> {
    pub segments: Vec<Segment<'a, T>>,
    /// Boundaries that split a run of significant positions.
    pub crossings: usize,
}

/// Board and segment starts for one code array.
#[derive(Debug, Clone)]
pub struct Plan {
    pub board: ScoreBoard,
    pub starts: Vec<usize>,
}

impl Plan {
    pub fn crossings(&self) -> usize {
        self.board.primary_cost(0).unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct Segmenter<C: Eq + Hash> {
    params: SegmentParams,
    labels: LabelSet<C>,
}

impl<C: LabelCode + Eq + Hash> Segmenter<C> {
    pub fn new(params: SegmentParams, labels: LabelSet<C>) -> Result<Self, SegmentError> {
        params.validate()?;
        Ok(Self { params, labels })
    }

    /// Runs the score board and path reconstruction over a finished code array.
    pub fn plan(&self, codes: &[u8]) -> Result<Plan, SegmentError> {
        self.params.validate_len(codes.len())?;
        let board = ScoreBoard::compute(codes, &self.params);
        if board.cell(0).is_none() {
            return Err(SegmentError::config(format!(
                "no combination of sizes {:?} and overlaps {:?} partitions {} positions",
                self.params.candidate_sizes(),
                self.params.candidate_overlaps(),
                codes.len()
            )));
        }
        let starts = reconstruct_path(&board)?;
        Ok(Plan { board, starts })
    }

    /// Segments `items`, labelling each through `classify`.
    pub fn segment<'a, T, F>(
        &self,
        items: &'a [T],
        classify: F,
    ) -> Result<Segmentation<'a, T>, SegmentError>
    where
        F: Fn(&T) -> Option<C>,
    {
        let codes = derive_codes(items, classify, &self.labels);
        let plan = self.plan(&codes)?;
        let segments = build_segments(items, &plan.board, &plan.starts)?;
        Ok(Segmentation {
            segments,
            crossings: plan.crossings(),
        })
    }
}

/// Counts the boundaries between consecutive segments that split a run.
pub fn count_crossings<T>(codes: &[u8], segments: &[Segment<'_, T>]) -> usize {
    segments
        .iter()
        .zip(segments.iter().skip(1))
        .map(|(current, next)| {
            scoreboard::crossing_penalty(codes, current.start, current.size, next.start)
        })
        .sum()
}
