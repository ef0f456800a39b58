
// low-memory mode: drop raw archives once conversion is over

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use read_pipeline::{files_with_extension, Result, SRA_EXTENSION};

/// Removes every `*.sra` in `sra_dir`, whether or not its conversion succeeded.
pub fn remove_archives(sra_dir: &Path) -> Result<Vec<PathBuf>> {
    if !sra_dir.is_dir() {
        debug!("No archive directory at {:?}, nothing to delete", sra_dir);
        return Ok(Vec::new());
    }
    let archives = files_with_extension(sra_dir, SRA_EXTENSION)?;
    for archive in &archives {
        debug!("Deleting {:?}", archive);
        fs::remove_file(archive)?;
    }
    info!("Deleted {} SRA files to save memory.", archives.len());
    Ok(archives)
}
