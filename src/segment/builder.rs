use super::{scoreboard::ScoreBoard, SegmentError};

/// A window over a borrowed sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a, T> {
    pub start: usize,
    pub size: usize,
    /// Inclusive.
    pub end: usize,
    pub items: &'a [T],
}

impl<'a, T> Segment<'a, T> {
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of positions shared with the segment that follows.
    pub fn overlap_with(&self, next: &Segment<'_, T>) -> usize {
        (self.end + 1).saturating_sub(next.start)
    }
}

/// Cuts one segment per start out of `items`, using the sizes on the board.
pub fn build_segments<'a, T>(
    items: &'a [T],
    board: &ScoreBoard,
    starts: &[usize],
) -> Result<Vec<Segment<'a, T>>, SegmentError> {
    starts
        .iter()
        .map(|&start| {
            let cell = board.cell(start).ok_or_else(|| {
                SegmentError::invariant(format!("segment start {} has no recorded size", start))
            })?;
            let end = start + cell.size - 1;
            let view = items.get(start..=end).ok_or_else(|| {
                SegmentError::invariant(format!(
                    "segment [{},{}] exceeds sequence of length {}",
                    start,
                    end,
                    items.len()
                ))
            })?;
            Ok(Segment {
                start,
                size: cell.size,
                end,
                items: view,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentParams;

    #[test]
    fn segments_view_the_source() {
        let items: Vec<char> = "ABCDEFGHIJKL".chars().collect();
        let board = ScoreBoard::compute(&[0u8; 12], &SegmentParams::fixed(4, 1));
        let segments = build_segments(&items, &board, &[0, 3, 6, 9]).unwrap();
        let views: Vec<String> = segments.iter().map(|s| s.items.iter().collect()).collect();
        assert_eq!(views, vec!["ABCD", "DEFG", "GHIJ", "JKL"]);
        assert_eq!(segments[3].end, 11);
        assert_eq!(segments[0].overlap_with(&segments[1]), 1);
    }

    #[test]
    fn start_without_cell_is_rejected() {
        let items = [0u8; 4];
        let board = ScoreBoard::compute(&items, &SegmentParams::fixed(4, 1));
        assert!(build_segments(&items, &board, &[7]).is_err());
    }

    #[test]
    fn board_longer_than_items_is_rejected() {
        let items = [0u8; 8];
        let board = ScoreBoard::compute(&[0u8; 12], &SegmentParams::fixed(4, 1));
        let err = build_segments(&items, &board, &[6]).unwrap_err();
        assert!(matches!(err, SegmentError::Invariant(_)));
    }
}
