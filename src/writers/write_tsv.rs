//! Defines the `TsvWriter` struct for writing segment tables.
//!

use crate::segment::{Segment, Segmentation};
use crate::structure::Residue;
use crate::utils::Result;
use itertools::Itertools;
use std::{
    env,
    fs::File,
    io::{BufWriter, Write},
};

const COLUMNS: [&str; 9] = [
    "model",
    "chain",
    "segment",
    "start",
    "end",
    "size",
    "first_residue",
    "last_residue",
    "sec_struc",
];

/// Writes one line per segment to a tab-separated file.
pub struct TsvWriter<W: Write> {
    writer: W,
    output_path: String,
}

impl TsvWriter<BufWriter<File>> {
    /// Creates the output file and writes the header.
    ///
    /// # Arguments
    /// * `output_path` - Path of the output TSV file.
    pub fn new(output_path: &str) -> Result<Self> {
        let file = File::create(output_path)
            .map_err(|e| format!("Invalid TSV output path {}: {}", output_path, e))?;
        Self::from_writer(BufWriter::new(file), output_path)
    }
}

impl<W: Write> TsvWriter<W> {
    pub fn from_writer(writer: W, output_path: &str) -> Result<Self> {
        let mut tsv_writer = TsvWriter {
            writer,
            output_path: output_path.to_string(),
        };
        tsv_writer.write_header()?;
        Ok(tsv_writer)
    }

    fn write_header(&mut self) -> Result<()> {
        let command_line = env::args().join(" ");
        let header = format!(
            "##{name}Version={}\n##{name}Command={}\n#{}\n",
            *crate::cli::FULL_VERSION,
            command_line,
            COLUMNS.iter().join("\t"),
            name = env!("CARGO_PKG_NAME"),
        );
        self.write_str(&header)
    }

    /// Writes all segments of one chain.
    pub fn write(
        &mut self,
        model: u32,
        chain_id: &str,
        segmentation: &Segmentation<'_, Residue>,
    ) -> Result<()> {
        for (index, segment) in segmentation.segments.iter().enumerate() {
            let line = format_segment(model, chain_id, index + 1, segment);
            self.write_str(&line)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer
            .flush()
            .map_err(|e| format!("Error flushing {}: {}", self.output_path, e))?;
        Ok(self.writer)
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.writer
            .write_all(s.as_bytes())
            .map_err(|e| format!("Error writing {}: {}", self.output_path, e))
    }
}

fn format_segment(
    model: u32,
    chain_id: &str,
    index: usize,
    segment: &Segment<'_, Residue>,
) -> String {
    let first_residue = segment.items.first().map_or(0, |r| r.number);
    let last_residue = segment.items.last().map_or(0, |r| r.number);
    let sec_struc: String = segment.items.iter().map(|r| r.sec_struc_code()).collect();
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
        model,
        chain_id,
        index,
        segment.start,
        segment.end,
        segment.size,
        first_residue,
        last_residue,
        sec_struc
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{LabelSet, SegmentParams, Segmenter};
    use crate::structure::{SecStrucType, DEFAULT_SIGNIFICANT};

    fn residues() -> Vec<Residue> {
        "..HHH---"
            .chars()
            .enumerate()
            .map(|(i, c)| Residue::new(10 + i as i32, "ALA", SecStrucType::from_code(c).ok()))
            .collect()
    }

    #[test]
    fn writes_header_and_segments() {
        let residues = residues();
        let segmenter = Segmenter::new(
            SegmentParams::fixed(4, 0),
            LabelSet::new(DEFAULT_SIGNIFICANT, true),
        )
        .unwrap();
        let segmentation = segmenter.segment(&residues, |r| r.sec_struc).unwrap();

        let mut writer = TsvWriter::from_writer(Vec::new(), "memory").unwrap();
        writer.write(1, "A", &segmentation).unwrap();
        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("##pepsegVersion="));
        assert!(lines[1].starts_with("##pepsegCommand="));
        assert_eq!(lines[2], format!("#{}", COLUMNS.join("\t")));
        assert_eq!(lines[3], "1\tA\t1\t0\t3\t4\t10\t13\t..HH");
        assert_eq!(lines[4], "1\tA\t2\t4\t7\t4\t14\t17\tH---");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.segments.tsv");
        let writer = TsvWriter::new(path.to_str().unwrap()).unwrap();
        writer.finish().unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}
