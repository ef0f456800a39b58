/*
Download SRA archives for every accession in input/SRRAccList.txt and turn them into FASTQ
    + prefetch the archives
    + fasterq-dump on a pool of 4 workers
        + se: <acc>.fastq, pe: <acc>_1.fastq and <acc>_2.fastq
    + optionally delete the .sra files (-m)
    + FastQC on everything in temporary/fastq_dump

Usage: download_reads -o Mus -e pe -m
*/

mod utils;
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use read_pipeline::Tools;
use utils::download::run_download;
use utils::get_args::Cli;

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
    debug!("Parsed commandline arguments: {:?}", cli);
    match run_download(&cli, &Tools::default()) {
        Ok(summary) => {
            info!("{} accessions converted, {} quality reports written, {} SRA files deleted",
                  summary.converted.len(), summary.reported.len(), summary.removed_archives.len());
            if !summary.failed.is_empty() {
                warn!("Accessions that failed conversion: {}", summary.failed.join(", "));
            }
            if !summary.report_failures.is_empty() {
                warn!("FastQC failed on {} files", summary.report_failures.len());
            }
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
