use crate::cli::ValidateArgs;
use crate::segment::Segmenter;
use crate::structure::read_structure;
use crate::utils::{summarize, Result};
use crate::workflows::{segment_structure, summarize_run, ModelSegments};

pub fn validate(args: ValidateArgs) -> Result<()> {
    let segmenter = Segmenter::new(args.segmentation.params(), args.segmentation.labels())?;
    let structure = read_structure(&args.input_path)?;
    let models = segment_structure(&segmenter, &structure);
    let report = collect_report(&models);

    let per_chain = summarize(&report.segments_per_chain);
    let sizes = summarize(&report.segment_sizes);
    log::info!(
        "Segments per chain - Range: [{},{}], Median: {:.2}, Mean: {:.2}, StdDev: {:.2}",
        per_chain.min,
        per_chain.max,
        per_chain.median,
        per_chain.mean,
        per_chain.std_dev
    );
    log::info!(
        "Segment sizes - Range: [{},{}], Median: {:.2}, Mean: {:.2}, StdDev: {:.2}",
        sizes.min,
        sizes.max,
        sizes.median,
        sizes.mean,
        sizes.std_dev
    );

    let summary = summarize_run(&models);
    log::info!("Boundary crossings: {}", summary.crossings);

    let total = summary.chains_ok + summary.chains_failed;
    match summary.chains_failed {
        0 => log::info!("Validation successful. Chains pass={}", summary.chains_ok),
        failed => log::info!(
            "Validation failed. Chains pass={} ({:.2}%), fail={} ({:.2}%)",
            summary.chains_ok,
            summary.chains_ok as f64 / total as f64 * 100.0,
            failed,
            failed as f64 / total as f64 * 100.0
        ),
    }

    Ok(())
}

#[derive(Debug, Default)]
struct Report {
    segments_per_chain: Vec<usize>,
    segment_sizes: Vec<usize>,
}

fn collect_report(models: &[ModelSegments<'_>]) -> Report {
    let mut report = Report::default();
    for segmentation in models
        .iter()
        .flat_map(|m| m.chains.values())
        .filter_map(|r| r.as_ref().ok())
    {
        report.segments_per_chain.push(segmentation.segments.len());
        report
            .segment_sizes
            .extend(segmentation.segments.iter().map(|s| s.size));
    }
    report
}
