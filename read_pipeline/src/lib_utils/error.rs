
// errors shared by both pipeline stages

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Accession list {} could not be read: {source}", path.display())]
    AccessionList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("--max_length is required when position is 'end'")]
    MissingTotalLength,

    #[error("Cannot remove {num_bases} bases from reads of length {max_length}")]
    CropExceedsLength { num_bases: u32, max_length: u32 },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} exited with {}", describe_code(*code))]
    ToolFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Conversion failed for {accession}, missing {}", missing.join(", "))]
    MissingOutput {
        accession: String,
        missing: Vec<String>,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => String::from("no status (terminated by signal)"),
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
