//! Backward dynamic programming over segment start positions.
//!
//! Every position `i` records the best segment starting at `i`: its size,
//! the start of the following segment and the cost of the remaining
//! partition. The cost is compared lexicographically: first the number of
//! boundaries that split a run of identically labelled significant
//! positions, then the deviation from the target size and overlap.

use super::SegmentParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Next(usize),
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Crossings accumulated from this position to the end.
    pub primary: usize,
    /// Deviation of the chosen size/overlap from the targets.
    pub secondary: usize,
    pub size: usize,
    pub link: Link,
}

impl Cell {
    fn cost(&self) -> (usize, usize) {
        (self.primary, self.secondary)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    cells: Vec<Option<Cell>>,
}

impl ScoreBoard {
    /// Fills the board for `codes`.
    ///
    /// The caller must have checked `params` and that `codes.len()` is at
    /// least the target size.
    pub fn compute(codes: &[u8], params: &SegmentParams) -> Self {
        let len = codes.len();
        let tail = params.target_size.min(len);
        let mut board = Self::with_tail(len, params.target_size, tail);

        for start in (0..len - tail).rev() {
            board.cells[start] = board.best_cell(codes, start, params);
        }
        log::trace!(
            "Filled score board of {} positions, {} unreachable",
            len,
            board.cells.iter().filter(|c| c.is_none()).count()
        );
        board
    }

    /// The last `tail` positions can only start the final segment.
    fn with_tail(len: usize, target_size: usize, tail: usize) -> Self {
        let mut cells = vec![None; len];
        for size in 1..=tail {
            cells[len - size] = Some(Cell {
                primary: 0,
                secondary: target_size - size,
                size,
                link: Link::Terminal,
            });
        }
        Self { cells }
    }

    fn best_cell(&self, codes: &[u8], start: usize, params: &SegmentParams) -> Option<Cell> {
        let mut best: Option<Cell> = None;
        // Sizes past the end and overlaps not below the size never yield a candidate.
        let sizes = params.candidate_sizes();
        let overlaps = params.candidate_overlaps();
        let max_size = (*sizes.end()).min(codes.len() - start);
        for size in *sizes.start()..=max_size {
            let max_overlap = (*overlaps.end()).min(size.saturating_sub(1));
            for overlap in *overlaps.start()..=max_overlap {
                let Some(link) = next_start(start, size, overlap, codes.len()) else {
                    continue;
                };
                let primary = match link {
                    Link::Terminal => 0,
                    Link::Next(next) => match self.cells[next] {
                        Some(cell) => cell.primary + crossing_penalty(codes, start, size, next),
                        None => continue,
                    },
                };
                let candidate = Cell {
                    primary,
                    secondary: params.deviation(size, overlap),
                    size,
                    link,
                };
                if best.map_or(true, |b| candidate.cost() < b.cost()) {
                    best = Some(candidate);
                }
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The recorded choice at `position`, `None` when unreachable or out of range.
    pub fn cell(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position).and_then(|c| c.as_ref())
    }

    pub fn primary_cost(&self, position: usize) -> Option<usize> {
        self.cell(position).map(|c| c.primary)
    }
}

/// Start of the segment following `[start, start + size)`.
///
/// `None` marks an invalid candidate.
fn next_start(start: usize, size: usize, overlap: usize, len: usize) -> Option<Link> {
    if overlap >= size || start + size > len {
        return None;
    }
    if start + size == len {
        return Some(Link::Terminal);
    }
    Some(Link::Next(start + size - overlap))
}

/// 1 when the boundary after `[start, start + size)` splits a run of equal
/// significant codes that began before `next`.
pub(crate) fn crossing_penalty(codes: &[u8], start: usize, size: usize, next: usize) -> usize {
    let last_in = start + size - 1;
    let code = codes[last_in];
    if code == 0 || codes.get(last_in + 1) != Some(&code) {
        return 0;
    }
    if next > run_start(codes, last_in) {
        1
    } else {
        0
    }
}

fn run_start(codes: &[u8], mut position: usize) -> usize {
    let code = codes[position];
    while position > 0 && codes[position - 1] == code {
        position -= 1;
    }
    position
}
