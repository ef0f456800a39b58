/*
    Trimming stage
        work out the crop step, fail before touching any tool if it is invalid
        for every accession, one after the other
            trimmomatic SE|PE with the crop step and optional MINLEN
            on failure log and move to the next accession
            sweep the outputs: delete empty files, FastQC the rest
*/

use std::path::{Path, PathBuf};
use std::time::Instant;
use log::{debug, error, info};
use read_pipeline::{ensure_dir, sweep_output, AccessionList, Ending, Layout, Result, ToolCommand,
                    Tools};
use super::crop::Crop;
use super::get_args::Cli;

#[derive(Debug)]
pub struct TrimJob {
    pub command: ToolCommand,
    /// every file trimmomatic is asked to write, in argument order
    pub outputs: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct TrimSummary {
    pub trimmed: Vec<String>,
    pub failed: Vec<String>,
    pub removed: Vec<PathBuf>,
    pub reported: Vec<PathBuf>,
    /// outputs FastQC could not report on, or empty outputs that could not be deleted
    pub report_failures: Vec<PathBuf>,
}

pub fn trim_job(tools: &Tools, accession: &str, cli: &Cli, crop: &Crop, in_dir: &Path,
                out_dir: &Path) -> TrimJob {
    let inputs: Vec<PathBuf> = cli.ending.fastq_names(accession)
        .into_iter()
        .map(|name| in_dir.join(name))
        .collect();
    let (mode, outputs) = match cli.ending {
        Ending::Se => ("SE", vec![out_dir.join(format!("{accession}.fastq"))]),
        Ending::Pe => ("PE", vec![
            out_dir.join(format!("{accession}_1.fastq")),
            out_dir.join(format!("{accession}_1_unpaired.fastq")),
            out_dir.join(format!("{accession}_2.fastq")),
            out_dir.join(format!("{accession}_2_unpaired.fastq")),
        ]),
    };
    let mut command = tools.trimmomatic()
        .arg(mode)
        .arg("-threads")
        .arg(cli.threads.to_string())
        .args(&inputs)
        .args(&outputs)
        .arg(crop.step());
    if let Some(minlen) = cli.minlen.filter(|&m| m > 0) {
        command = command.arg(format!("MINLEN:{minlen}"));
    }
    TrimJob { command, outputs }
}

pub fn run_trimming(cli: &Cli, tools: &Tools) -> Result<TrimSummary> {
    let crop = Crop::from_request(cli.position, cli.num_bases, cli.max_length)?;
    debug!("Crop step: {}", crop.step());

    let layout = Layout::absolute(&cli.workdir)?;
    let tools = tools.in_dir(layout.root());
    let accessions = AccessionList::from_file(&layout.accession_list())?;
    let in_dir = layout.fastq_dir();
    let out_dir = layout.trimmed_dir();
    ensure_dir(&out_dir)?;
    let report_dir = layout.post_trim_report_dir();
    ensure_dir(&report_dir)?;

    let mut summary = TrimSummary::default();
    for accession in &accessions {
        let start_time = Instant::now();
        let job = trim_job(&tools, accession, cli, &crop, &in_dir, &out_dir);
        if let Err(e) = job.command.run(cli.verbose) {
            error!("Error processing {}: {}", accession, e);
            summary.failed.push(accession.clone());
            continue;
        }
        if cli.verbose {
            info!("Time taken for {}: {:.2} seconds", accession, start_time.elapsed().as_secs_f64());
        }
        let swept = sweep_output(&tools, &job.outputs, &report_dir, Some(cli.threads), cli.verbose);
        summary.removed.extend(swept.removed);
        summary.reported.extend(swept.reported);
        summary.report_failures.extend(swept.failed);
        summary.trimmed.push(accession.clone());
    }
    if cli.verbose {
        info!("Pipeline step completed.");
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use read_pipeline::PipelineError;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["trim_reads"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    // paths in these tests carry no characters that need quoting
    fn words(command: &ToolCommand) -> Vec<String> {
        command.to_string().split_whitespace().skip(1).map(String::from).collect()
    }

    #[test]
    fn single_end_command() {
        let cli = cli(&["-n", "5", "-p", "start", "-e", "se"]);
        let crop = Crop::from_request(cli.position, cli.num_bases, cli.max_length).unwrap();
        let job = trim_job(&Tools::default(), "SRR001", &cli, &crop, Path::new("in"), Path::new("out"));
        assert_eq!(
            job.command.to_string(),
            "trimmomatic SE -threads 6 in/SRR001.fastq out/SRR001.fastq HEADCROP:5"
        );
        assert_eq!(job.outputs, vec![PathBuf::from("out/SRR001.fastq")]);
    }

    #[test]
    fn paired_end_tail_crop_with_minlen() {
        let cli = cli(&["-n", "10", "-p", "end", "-e", "pe", "--max_length", "100", "--minlen", "36"]);
        let crop = Crop::from_request(cli.position, cli.num_bases, cli.max_length).unwrap();
        let job = trim_job(&Tools::default(), "SRR002", &cli, &crop, Path::new("in"), Path::new("out"));
        assert_eq!(words(&job.command), vec![
            "PE", "-threads", "6",
            "in/SRR002_1.fastq", "in/SRR002_2.fastq",
            "out/SRR002_1.fastq", "out/SRR002_1_unpaired.fastq",
            "out/SRR002_2.fastq", "out/SRR002_2_unpaired.fastq",
            "CROP:90", "MINLEN:36",
        ]);
        assert_eq!(job.outputs.len(), 4);
    }

    #[test]
    fn zero_minlen_is_left_out() {
        let cli = cli(&["-n", "3", "-p", "start", "-e", "se", "--minlen", "0"]);
        let crop = Crop::from_request(cli.position, cli.num_bases, cli.max_length).unwrap();
        let job = trim_job(&Tools::default(), "SRR003", &cli, &crop, Path::new("in"), Path::new("out"));
        assert_eq!(words(&job.command).last().map(String::as_str), Some("HEADCROP:3"));
    }

    #[cfg(unix)]
    mod stage {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::tempdir;

        fn script(dir: &Path, name: &str, body: &str) -> std::ffi::OsString {
            let path = dir.join(name);
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path.into_os_string()
        }

        // trimmomatic stand-in for SE mode: copies input to output unless the accession is SRR_BAD,
        // an input named EMPTY yields an empty output; both tools log their arguments
        fn fake_tools(bin: &Path) -> Tools {
            let trim_calls = bin.join("trimmomatic.calls");
            let qc_calls = bin.join("fastqc.calls");
            Tools {
                trimmomatic: script(bin, "trimmomatic", &format!(
                    "printf '%s\\n' \"$*\" >> {}\ncase \"$4\" in *SRR_BAD*) exit 2;; *EMPTY*) : > \"$5\";; *) cp \"$4\" \"$5\";; esac",
                    trim_calls.display()
                )),
                fastqc: script(bin, "fastqc", &format!("printf '%s\\n' \"$*\" >> {}", qc_calls.display())),
                ..Tools::default()
            }
        }

        fn workdir(list: &str, inputs: &[(&str, &str)]) -> tempfile::TempDir {
            let dir = tempdir().unwrap();
            fs::create_dir_all(dir.path().join("input")).unwrap();
            fs::write(dir.path().join("input/SRRAccList.txt"), list).unwrap();
            let fastq = dir.path().join("temporary/fastq_dump");
            fs::create_dir_all(&fastq).unwrap();
            for (name, contents) in inputs {
                fs::write(fastq.join(name), contents).unwrap();
            }
            dir
        }

        fn stage_cli(work: &Path, extra: &[&str]) -> Cli {
            let mut args = vec!["-e", "se", "-w", work.to_str().unwrap()];
            args.extend_from_slice(extra);
            cli(&args)
        }

        #[test]
        fn failures_are_logged_and_the_loop_continues() {
            let work = workdir("SRR_BAD\n\nSRR001\n", &[("SRR001.fastq", "@r\nACGT\n+\nIIII\n")]);
            let bin = tempdir().unwrap();
            let cli = stage_cli(work.path(), &["-n", "10", "-p", "end", "--max_length", "100"]);

            let summary = run_trimming(&cli, &fake_tools(bin.path())).unwrap();

            assert_eq!(summary.failed, vec!["SRR_BAD"]);
            assert_eq!(summary.trimmed, vec!["SRR001"]);
            let trim_calls = fs::read_to_string(bin.path().join("trimmomatic.calls")).unwrap();
            let order: Vec<bool> = trim_calls.lines().map(|l| l.contains("SRR_BAD")).collect();
            assert_eq!(order, vec![true, false]);
            assert!(trim_calls.lines().all(|l| l.ends_with("CROP:90")));
            let qc_calls = fs::read_to_string(bin.path().join("fastqc.calls")).unwrap();
            assert_eq!(qc_calls.lines().count(), 1);
            assert!(qc_calls.starts_with("-t 6 -o "));
            assert!(qc_calls.contains("post_trimming_fastqc"));
        }

        #[test]
        fn empty_trim_output_is_deleted_not_reported() {
            let work = workdir("EMPTY001\n", &[("EMPTY001.fastq", "@r\nACGT\n+\nIIII\n")]);
            let bin = tempdir().unwrap();
            let cli = stage_cli(work.path(), &["-n", "2", "-p", "start"]);

            let summary = run_trimming(&cli, &fake_tools(bin.path())).unwrap();

            let output = work.path().join("temporary/trimmomatic/output/EMPTY001.fastq");
            assert_eq!(summary.removed, vec![output.clone()]);
            assert!(summary.reported.is_empty());
            assert!(!output.exists());
            assert!(!bin.path().join("fastqc.calls").exists());
        }

        #[test]
        fn report_failures_are_collected_and_the_accession_still_counts() {
            let work = workdir("SRR001\n", &[("SRR001.fastq", "@r\nACGT\n+\nIIII\n")]);
            let bin = tempdir().unwrap();
            let cli = stage_cli(work.path(), &["-n", "2", "-p", "start"]);
            let tools = Tools { fastqc: "false".into(), ..fake_tools(bin.path()) };

            let summary = run_trimming(&cli, &tools).unwrap();

            assert_eq!(summary.trimmed, vec!["SRR001"]);
            assert!(summary.failed.is_empty());
            assert!(summary.reported.is_empty());
            assert_eq!(summary.report_failures,
                       vec![work.path().join("temporary/trimmomatic/output/SRR001.fastq")]);
        }

        #[test]
        fn tools_run_inside_the_working_directory() {
            let work = workdir("SRR001\n", &[("SRR001.fastq", "@r\nACGT\n+\nIIII\n")]);
            let bin = tempdir().unwrap();
            let cli = stage_cli(work.path(), &["-n", "2", "-p", "start"]);
            let tools = Tools { fastqc: script(bin.path(), "fastqc", "pwd > fastqc.cwd"),
                                ..fake_tools(bin.path()) };

            run_trimming(&cli, &tools).unwrap();

            let cwd = fs::read_to_string(work.path().join("fastqc.cwd")).unwrap();
            assert_eq!(fs::canonicalize(cwd.trim()).unwrap(), fs::canonicalize(work.path()).unwrap());
        }

        #[test]
        fn missing_total_length_stops_before_any_tool_runs() {
            let work = workdir("SRR001\n", &[("SRR001.fastq", "x")]);
            let bin = tempdir().unwrap();
            let mut cli = stage_cli(work.path(), &["-n", "10", "-p", "start"]);
            cli.position = crate::utils::crop::CropPosition::End;

            let err = run_trimming(&cli, &fake_tools(bin.path())).unwrap_err();

            assert!(matches!(err, PipelineError::MissingTotalLength));
            assert!(!bin.path().join("trimmomatic.calls").exists());
            assert!(!work.path().join("temporary/trimmomatic").exists());
        }

        #[test]
        fn missing_accession_list_is_fatal() {
            let work = tempdir().unwrap();
            let bin = tempdir().unwrap();
            let cli = stage_cli(work.path(), &["-n", "2", "-p", "start"]);
            let err = run_trimming(&cli, &fake_tools(bin.path())).unwrap_err();
            assert!(matches!(err, PipelineError::AccessionList { .. }));
        }
    }
}
