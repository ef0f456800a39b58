
// fastqc over finished read files

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, error, info};
use super::error::Result;
use super::tool_command::Tools;

pub fn quality_report(tools: &Tools, file: &Path, report_dir: &Path, threads: Option<usize>,
                      verbose: bool) -> Result<()> {
    if verbose {
        info!("Running FastQC on {}...", display_name(file));
    }
    tools.fastqc(file, report_dir, threads).run(verbose)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub reported: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Delete zero-byte outputs and quality-report the rest. Absent files are skipped,
/// a file that can be neither deleted nor reported lands in `failed`.
pub fn sweep_output(tools: &Tools, files: &[PathBuf], report_dir: &Path, threads: Option<usize>,
                    verbose: bool) -> SweepSummary {
    let mut summary = SweepSummary::default();
    for file in files {
        let metadata = match fs::metadata(file) {
            Ok(metadata) => metadata,
            Err(_) => {
                debug!("{:?} was not produced, skipping", file);
                continue;
            }
        };
        if metadata.len() == 0 {
            if verbose {
                info!("File {} is empty. Deleting.", display_name(file));
            }
            match fs::remove_file(file) {
                Ok(()) => summary.removed.push(file.clone()),
                Err(e) => {
                    error!("Could not delete empty file {}: {}", display_name(file), e);
                    summary.failed.push(file.clone());
                }
            }
        } else {
            match quality_report(tools, file, report_dir, threads, verbose) {
                Ok(()) => summary.reported.push(file.clone()),
                Err(e) => {
                    error!("Quality report failed for {}: {}", display_name(file), e);
                    summary.failed.push(file.clone());
                }
            }
        }
    }
    summary
}

fn display_name(file: &Path) -> String {
    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string())
}
