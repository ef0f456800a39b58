
/*
    External tools the pipeline drives
        prefetch        fetch raw .sra archives
        fasterq-dump    convert an archive to FASTQ
        fastqc          per-file quality report
        trimmomatic     fixed-length cropping

    Commands are run without a shell, arguments are passed as-is.
*/

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use log::{debug, error, info};
use super::error::{PipelineError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new<S: Into<OsString>>(program: S) -> ToolCommand {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg<S: Into<OsString>>(mut self, arg: S) -> ToolCommand {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> ToolCommand
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> ToolCommand {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Run to completion. stdout and stderr are echoed to the log, stderr at error level on failure.
    pub fn run(&self, verbose: bool) -> Result<()> {
        if verbose {
            info!("Running: {}", self);
        } else {
            debug!("Running: {}", self);
        }
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        let output = command.output().map_err(|source| PipelineError::Spawn {
            program: self.program.to_string_lossy().into_owned(),
            source,
        })?;
        echo_output(&String::from_utf8_lossy(&output.stdout), verbose);
        let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
        if output.status.success() {
            // trimmomatic and fastqc write their summaries to stderr
            echo_output(&stderr, verbose);
            Ok(())
        } else {
            if !stderr.is_empty() {
                error!("Error: {}", stderr);
            }
            Err(PipelineError::ToolFailed {
                command: self.to_string(),
                code: output.status.code(),
                stderr,
            })
        }
    }
}

fn echo_output(text: &str, verbose: bool) {
    if text.trim().is_empty() {
        return;
    }
    if verbose {
        info!("{}", text.trim_end());
    } else {
        debug!("{}", text.trim_end());
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

// single-quote anything a shell would split or expand, for copy-pasteable logs
fn quote(word: &OsString) -> String {
    let word = word.to_string_lossy();
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@%".contains(c));
    if plain {
        word.into_owned()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Program names, resolved through PATH unless overridden
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub prefetch: OsString,
    pub fasterq_dump: OsString,
    pub fastqc: OsString,
    pub trimmomatic: OsString,
    /// directory the tools run in, the caller's cwd when unset
    pub workdir: Option<PathBuf>,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            prefetch: "prefetch".into(),
            fasterq_dump: "fasterq-dump".into(),
            fastqc: "fastqc".into(),
            trimmomatic: "trimmomatic".into(),
            workdir: None,
        }
    }
}

impl Tools {
    pub fn in_dir(&self, dir: &Path) -> Tools {
        Self { workdir: Some(dir.to_path_buf()), ..self.clone() }
    }

    fn command(&self, program: &OsString) -> ToolCommand {
        let command = ToolCommand::new(program.clone());
        match &self.workdir {
            Some(dir) => command.current_dir(dir),
            None => command,
        }
    }

    pub fn prefetch(&self, accession_list: &Path) -> ToolCommand {
        self.command(&self.prefetch)
            .arg("--option-file")
            .arg(accession_list)
    }

    pub fn fasterq_dump(&self, accession: &str, out_dir: &Path) -> ToolCommand {
        self.command(&self.fasterq_dump)
            .arg(accession)
            .arg("-O")
            .arg(out_dir)
    }

    pub fn fastqc(&self, file: &Path, out_dir: &Path, threads: Option<usize>) -> ToolCommand {
        let mut command = self.command(&self.fastqc);
        if let Some(threads) = threads {
            command = command.arg("-t").arg(threads.to_string());
        }
        command.arg("-o").arg(out_dir).arg(file)
    }

    pub fn trimmomatic(&self) -> ToolCommand {
        self.command(&self.trimmomatic)
    }
}
