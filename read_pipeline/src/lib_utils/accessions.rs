
// accession list shared by the download and trimming stages

use std::fs;
use std::path::Path;
use log::{debug, info};
use super::error::{PipelineError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessionList {
    accessions: Vec<String>,
}

impl AccessionList {
    pub fn from_file(path: &Path) -> Result<AccessionList> {
        let contents = fs::read_to_string(path).map_err(|source| PipelineError::AccessionList {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&contents);
        info!("Read {} accessions from {:?}", list.len(), path);
        Ok(list)
    }

    /// One identifier per line; surrounding whitespace is stripped and blank lines skipped.
    pub fn parse(contents: &str) -> AccessionList {
        let accessions = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                debug!("Accession: {}", line);
                line.to_string()
            })
            .collect();
        Self { accessions }
    }

    pub fn len(&self) -> usize {
        self.accessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.accessions.iter()
    }
}

impl<'a> IntoIterator for &'a AccessionList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
