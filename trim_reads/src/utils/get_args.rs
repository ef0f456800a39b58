use clap::Parser;
use std::path::PathBuf;
use read_pipeline::Ending;
use super::crop::CropPosition;

#[derive(Parser, Debug)]
#[command(author, version, about = "Trim bases from sequencing reads using Trimmomatic.", long_about = None)]
pub struct Cli {
    /// Number of bases to remove
    #[arg(short='n', long="num_bases", required = true)]
    pub num_bases: u32,
    /// Remove bases from the 'start' or 'end' of the reads
    #[arg(short='p', long="position", value_enum, required = true)]
    pub position: CropPosition,
    /// Single-end (se) or paired-end (pe) reads
    #[arg(short='e', long="ending", value_enum, required = true)]
    pub ending: Ending,
    /// Print commands, tool output and timings. Quiet by default
    #[arg(short='v', long="verbose")]
    pub verbose: bool,
    /// Total read length. Required when position is 'end'
    #[arg(long="max_length", visible_alias="max", required_if_eq("position", "end"))]
    pub max_length: Option<u32>,
    /// Number of threads handed to trimmomatic and FastQC. Default: 6
    #[arg(short='t', long="threads", visible_alias="th", value_parser=validate_threads, default_value_t=6)]
    pub threads: usize,
    /// Minimum length of the reads after trimming (optional)
    #[arg(long="minlen", visible_alias="min")]
    pub minlen: Option<u32>,
    /// Directory holding input/ and temporary/, the external tools run inside it. Default: "."
    #[arg(short='w', long="workdir", default_value = ".")]
    pub workdir: PathBuf,
}

fn validate_threads(input_str: &str) -> Result<usize, String> {
    let threads: usize = input_str
        .parse()
        .map_err(|_| format!("'{}' is not a thread count", input_str))?;
    if threads > 0 {
        Ok(threads)
    } else {
        Err(String::from("At least one thread is needed"))
    }
}
