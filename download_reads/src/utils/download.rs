/*
    Acquisition stage
        read accession list
        prefetch every archive in one call
        convert archives to FASTQ on the worker pool
        low-memory mode: delete the archives
        FastQC on every FASTQ in the conversion directory

    Only a missing accession list or an unusable directory stops the stage,
    anything that goes wrong for a single accession is logged and skipped.
*/

use std::path::PathBuf;
use log::{debug, error, info};
use read_pipeline::{ensure_dir, files_with_extension, quality_report, AccessionList, Layout,
                    Result, Tools, FASTQ_EXTENSION};
use super::cleanup::remove_archives;
use super::convert_archives::convert_archives;
use super::get_args::Cli;

#[derive(Debug, Default)]
pub struct DownloadSummary {
    pub converted: Vec<String>,
    pub failed: Vec<String>,
    pub removed_archives: Vec<PathBuf>,
    pub reported: Vec<PathBuf>,
    pub report_failures: Vec<PathBuf>,
}

pub fn run_download(cli: &Cli, tools: &Tools) -> Result<DownloadSummary> {
    let layout = Layout::absolute(&cli.workdir)?;
    let tools = tools.in_dir(layout.root());
    let references = cli.organism.references();
    info!("Reference genome: {:?}", layout.resolve(references.genome));
    info!("Annotation: {:?}", layout.resolve(references.annotation));

    let accession_file = layout.accession_list();
    let accessions = AccessionList::from_file(&accession_file)?;
    let mut summary = DownloadSummary::default();

    if cli.verbose {
        info!("Downloading SRA data...");
    }
    if let Err(e) = tools.prefetch(&accession_file).run(cli.verbose) {
        error!("Error: {}", e);
    }

    let fastq_dir = layout.fastq_dir();
    ensure_dir(&fastq_dir)?;
    for outcome in convert_archives(&accessions, cli.ending, &tools, &fastq_dir, cli.verbose) {
        match outcome.result {
            Ok(()) => summary.converted.push(outcome.accession),
            Err(_) => summary.failed.push(outcome.accession),
        }
    }
    info!("Converted {} of {} accessions", summary.converted.len(), accessions.len());

    if cli.memory {
        match remove_archives(&layout.sra_dir()) {
            Ok(removed) => summary.removed_archives = removed,
            Err(e) => error!("Error: could not delete SRA files: {}", e),
        }
    }

    let report_dir = layout.download_report_dir();
    ensure_dir(&report_dir)?;
    for fastq in files_with_extension(&fastq_dir, FASTQ_EXTENSION)? {
        debug!("Quality reporting {:?}", fastq);
        match quality_report(&tools, &fastq, &report_dir, None, cli.verbose) {
            Ok(()) => summary.reported.push(fastq),
            Err(e) => {
                error!("Error: {}", e);
                summary.report_failures.push(fastq);
            }
        }
    }
    if cli.verbose {
        info!("FastQC analysis completed.");
    }
    Ok(summary)
}
