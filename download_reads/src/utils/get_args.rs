use clap::Parser;
use std::path::PathBuf;
use read_pipeline::{Ending, Organism};

#[derive(Parser, Debug)]
#[command(author, version, about = "Download SRA files, convert to FASTQ, and run initial FastQC.", long_about = None)]
pub struct Cli {
    /// Organism the samples come from, selects the reference genome and annotation
    #[arg(short='o', long="organism", value_enum, required = true)]
    pub organism: Organism,
    /// Single-end (se) or paired-end (pe) sequencing. Default: se
    #[arg(short='e', long="end", value_enum, default_value_t=Ending::Se)]
    pub ending: Ending,
    /// Print tool output and progress messages. Quiet by default
    #[arg(short='v', long="verbose")]
    pub verbose: bool,
    /// Delete SRA files after conversion to save memory
    #[arg(short='m', long="memory")]
    pub memory: bool,
    /// Directory holding input/ and temporary/, the external tools run inside it. Default: "."
    #[arg(short='w', long="workdir", default_value = ".")]
    pub workdir: PathBuf,
}
