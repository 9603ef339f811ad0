mod batch;

pub use batch::{
    segment_chain, segment_model, segment_structure, summarize_run, ChainResult, ChainSegments,
    ModelSegments, RunSummary,
};
