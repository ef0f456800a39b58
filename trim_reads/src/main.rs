/*
Trim a fixed number of bases from every read with trimmomatic, then FastQC the survivors
    + reads come from temporary/fastq_dump, as left by download_reads
    + position start: HEADCROP:<num_bases>
    + position end: CROP:<max_length - num_bases>, --max_length is mandatory
    + empty outputs are deleted, non-empty ones go through FastQC

Usage: trim_reads -n 10 -p end --max_length 100 -e pe
*/

mod utils;
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use read_pipeline::Tools;
use utils::get_args::Cli;
use utils::trim_accessions::run_trimming;

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
    debug!("Parsed commandline arguments: {:?}", cli);
    match run_trimming(&cli, &Tools::default()) {
        Ok(summary) => {
            info!("{} accessions trimmed, {} files quality reported, {} empty files deleted",
                  summary.trimmed.len(), summary.reported.len(), summary.removed.len());
            if !summary.failed.is_empty() {
                warn!("Accessions that failed trimming: {}", summary.failed.join(", "));
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
