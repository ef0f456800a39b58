
// fixed directory tree the two stages hand files over through

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use super::error::Result;

const ACCESSION_LIST: &str = "input/SRRAccList.txt";
const SRA_DIR: &str = "temporary/sratoolkit/sra";
const FASTQ_DUMP_DIR: &str = "temporary/fastq_dump";
const TRIMMED_DIR: &str = "temporary/trimmomatic/output";
const DOWNLOAD_FASTQC_DIR: &str = "temporary/fastqc/download_fastqc";
const POST_TRIM_FASTQC_DIR: &str = "temporary/fastqc/post_trimming_fastqc";

pub const SRA_EXTENSION: &str = "sra";
pub const FASTQ_EXTENSION: &str = "fastq";

#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: &Path) -> Layout {
        Self { root: root.to_path_buf() }
    }

    /// Anchored at the current directory when `root` is relative, so the paths
    /// stay valid for tools started inside the working directory.
    pub fn absolute(root: &Path) -> Result<Layout> {
        if root.is_absolute() {
            Ok(Self::new(root))
        } else {
            Ok(Self::new(&env::current_dir()?.join(root)))
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn accession_list(&self) -> PathBuf {
        self.root.join(ACCESSION_LIST)
    }

    pub fn sra_dir(&self) -> PathBuf {
        self.root.join(SRA_DIR)
    }

    pub fn fastq_dir(&self) -> PathBuf {
        self.root.join(FASTQ_DUMP_DIR)
    }

    pub fn trimmed_dir(&self) -> PathBuf {
        self.root.join(TRIMMED_DIR)
    }

    pub fn download_report_dir(&self) -> PathBuf {
        self.root.join(DOWNLOAD_FASTQC_DIR)
    }

    pub fn post_trim_report_dir(&self) -> PathBuf {
        self.root.join(POST_TRIM_FASTQC_DIR)
    }

    // reference paths are given relative to the working directory
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    debug!("Ensuring directory {:?}", dir);
    fs::create_dir_all(dir)?;
    Ok(())
}

// files in `dir` with the given extension, sorted by name
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
