/*
    Shared plumbing for the read preparation stages
        accessions: read the accession list, one id per line
        layout: fixed directory tree under the working directory
        sample: single/paired-end file naming, organism references
        tool_command: build and run external tool invocations
        quality_report: fastqc runs, post-trim sweep of outputs

    Stages communicate only through files in the layout.
*/

pub mod lib_utils;

pub use lib_utils::accessions::AccessionList;
pub use lib_utils::error::{PipelineError, Result};
pub use lib_utils::layout::{ensure_dir, files_with_extension, Layout, FASTQ_EXTENSION, SRA_EXTENSION};
pub use lib_utils::quality_report::{quality_report, sweep_output, SweepSummary};
pub use lib_utils::sample::{Ending, Organism, ReferencePaths};
pub use lib_utils::tool_command::{ToolCommand, Tools};
