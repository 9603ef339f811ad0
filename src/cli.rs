use crate::segment::{LabelSet, SegmentParams};
use crate::structure::{parse_sec_struc_set, SecStrucSet, SecStrucType};
use crate::utils::Result;
use chrono::Datelike;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="pepseg",
          version=&**FULL_VERSION,
          about="Overlapping peptide segmentation of protein chains",
          long_about = None,
          disable_help_subcommand = true,
          after_help = format!("Copyright (C) {}", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Segment every chain of a residue table")]
    Segment(SegmentArgs),
    #[clap(about = "Check that every chain of a residue table can be segmented")]
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("segment")))]
#[command(arg_required_else_help(true))]
pub struct SegmentArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "Residue table: model chain number name sec_struc (optionally gzipped)")]
    #[clap(value_name = "TABLE")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[command(flatten)]
    pub segmentation: SegmentationArgs,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("validate")))]
#[command(arg_required_else_help(true))]
pub struct ValidateArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "Residue table: model chain number name sec_struc (optionally gzipped)")]
    #[clap(value_name = "TABLE")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[command(flatten)]
    pub segmentation: SegmentationArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SegmentationArgs {
    #[clap(help_heading("Segmentation"))]
    #[clap(long = "size")]
    #[clap(value_name = "SIZE")]
    #[clap(help = "Target segment size")]
    #[clap(default_value = "10")]
    pub size: usize,

    #[clap(help_heading("Segmentation"))]
    #[clap(long = "min-size")]
    #[clap(value_name = "SIZE")]
    #[clap(help = "Smallest segment size to consider")]
    #[clap(default_value = "8")]
    pub min_size: usize,

    #[clap(help_heading("Segmentation"))]
    #[clap(long = "max-size")]
    #[clap(value_name = "SIZE")]
    #[clap(help = "Largest segment size to consider")]
    #[clap(default_value = "12")]
    pub max_size: usize,

    #[clap(help_heading("Segmentation"))]
    #[clap(long = "overlap")]
    #[clap(value_name = "OVERLAP")]
    #[clap(help = "Target overlap between consecutive segments")]
    #[clap(default_value = "2")]
    pub overlap: usize,

    #[clap(help_heading("Segmentation"))]
    #[clap(long = "min-overlap")]
    #[clap(value_name = "OVERLAP")]
    #[clap(help = "Smallest overlap to consider")]
    #[clap(default_value = "2")]
    pub min_overlap: usize,

    #[clap(help_heading("Segmentation"))]
    #[clap(long = "max-overlap")]
    #[clap(value_name = "OVERLAP")]
    #[clap(help = "Largest overlap to consider")]
    #[clap(default_value = "4")]
    pub max_overlap: usize,

    #[clap(help_heading("Segmentation"))]
    #[clap(long = "classes")]
    #[clap(value_name = "CODES")]
    #[clap(help = "Secondary structure codes that should not be split (HGIPEBTS-)")]
    #[clap(default_value_t = SecStrucSet::default())]
    #[arg(value_parser = parse_sec_struc_set)]
    pub classes: SecStrucSet,

    #[clap(help_heading("Segmentation"))]
    #[clap(long = "collapse-classes")]
    #[clap(help = "Treat all selected classes as one when detecting runs")]
    pub collapse_classes: bool,
}

impl SegmentationArgs {
    pub fn params(&self) -> SegmentParams {
        SegmentParams {
            target_size: self.size,
            min_size: self.min_size,
            max_size: self.max_size,
            target_overlap: self.overlap,
            min_overlap: self.min_overlap,
            max_overlap: self.max_overlap,
        }
    }

    pub fn labels(&self) -> LabelSet<SecStrucType> {
        LabelSet::new(self.classes.iter(), !self.collapse_classes)
    }
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}
