use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// The inputs cannot be segmented with the requested sizes and overlaps.
    Config(String),
    /// The score board or path broke one of its structural guarantees.
    Invariant(String),
}

impl SegmentError {
    pub fn config(msg: impl Into<String>) -> Self {
        SegmentError::Config(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        SegmentError::Invariant(msg.into())
    }

    pub fn is_config(&self) -> bool {
        matches!(self, SegmentError::Config(_))
    }
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::Config(msg) => write!(f, "Invalid segmentation configuration: {}", msg),
            SegmentError::Invariant(msg) => write!(f, "Segmentation invariant violated: {}", msg),
        }
    }
}

impl From<SegmentError> for String {
    fn from(err: SegmentError) -> Self {
        err.to_string()
    }
}
