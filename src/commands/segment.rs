use crate::cli::SegmentArgs;
use crate::segment::Segmenter;
use crate::structure::read_structure;
use crate::utils::{create_writer, Result};
use crate::workflows::{segment_structure, summarize_run};
use crate::writers::TsvWriter;
use rayon::ThreadPoolBuilder;
use std::time;

pub fn segment(args: SegmentArgs) -> Result<()> {
    let start_timer = time::Instant::now();

    let segmenter = Segmenter::new(args.segmentation.params(), args.segmentation.labels())?;
    let structure = read_structure(&args.input_path)?;
    log::info!(
        "Loaded {} models with {} chains from {}",
        structure.models.len(),
        structure.chain_count(),
        args.input_path.display()
    );

    let mut tsv_writer = create_writer(&args.output_prefix, "segments.tsv", TsvWriter::new)?;

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = initialize_thread_pool(args.num_threads)?;
    let models = pool.install(|| segment_structure(&segmenter, &structure));

    for (model, segmented) in structure.models.iter().zip(&models) {
        for chain in &model.chains {
            if let Some(Ok(segmentation)) = segmented.chains.get(&chain.id) {
                tsv_writer.write(model.number, &chain.id, segmentation)?;
            }
        }
    }
    tsv_writer.finish()?;

    let summary = summarize_run(&models);
    match summary.chains_failed {
        0 => log::info!(
            "Segmented {} chains into {} segments ({} crossings)",
            summary.chains_ok,
            summary.segments,
            summary.crossings
        ),
        failed => log::warn!(
            "Segmented {} chains into {} segments ({} crossings), {} chains failed",
            summary.chains_ok,
            summary.segments,
            summary.crossings,
            failed
        ),
    }
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}

fn initialize_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("pepseg-{}", i))
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;

    const TABLE: &str = "\
1 A 1 MET -
1 A 2 ALA -
1 A 3 LYS H
1 A 4 LEU H
1 A 5 GLU H
1 A 6 GLY -
1 A 7 SER -
1 A 8 THR -
1 B 1 MET H
";

    #[test]
    fn segment_writes_table_and_skips_failed_chains() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("residues.tsv");
        std::fs::write(&input, TABLE).unwrap();
        let prefix = dir.path().join("out");

        let cli = Cli::parse_from([
            "pepseg",
            "segment",
            "-i",
            input.to_str().unwrap(),
            "-o",
            prefix.to_str().unwrap(),
            "--size",
            "4",
            "--min-size",
            "3",
            "--max-size",
            "5",
            "--overlap",
            "0",
            "--min-overlap",
            "0",
            "--max-overlap",
            "0",
            "-t",
            "2",
        ]);
        let Command::Segment(args) = cli.command else {
            panic!("expected segment");
        };
        segment(args).unwrap();

        let output = std::fs::read_to_string(dir.path().join("out.segments.tsv")).unwrap();
        let rows: Vec<&str> = output.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(
            rows,
            vec!["1\tA\t1\t0\t4\t5\t1\t5\t--HHH", "1\tA\t2\t5\t7\t3\t6\t8\t---"]
        );
    }

    #[test]
    fn segment_rejects_bad_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("residues.tsv");
        std::fs::write(&input, TABLE).unwrap();
        let prefix = dir.path().join("out");
        let cli = Cli::parse_from([
            "pepseg",
            "segment",
            "-i",
            input.to_str().unwrap(),
            "-o",
            prefix.to_str().unwrap(),
            "--size",
            "4",
            "--min-size",
            "4",
            "--max-size",
            "4",
            "--overlap",
            "4",
            "--min-overlap",
            "4",
        ]);
        let Command::Segment(args) = cli.command else {
            panic!("expected segment");
        };
        assert!(segment(args).is_err());
        assert!(!dir.path().join("out.segments.tsv").exists());
    }
}
