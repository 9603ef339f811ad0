use super::{
    scoreboard::{Link, ScoreBoard},
    SegmentError,
};

/// Follows the board links from position 0 and returns the segment starts.
pub fn reconstruct_path(board: &ScoreBoard) -> Result<Vec<usize>, SegmentError> {
    let mut starts = Vec::new();
    let mut position = 0;
    loop {
        if starts.len() >= board.len() {
            return Err(SegmentError::invariant(format!(
                "path from position 0 did not terminate within {} steps",
                board.len()
            )));
        }
        let cell = board.cell(position).ok_or_else(|| {
            SegmentError::invariant(format!("position {} has no recorded segment", position))
        })?;
        starts.push(position);
        match cell.link {
            Link::Terminal => return Ok(starts),
            Link::Next(next) if next > position => position = next,
            Link::Next(next) => {
                return Err(SegmentError::invariant(format!(
                    "segment at {} links backwards to {}",
                    position, next
                )))
            }
        }
    }
}
