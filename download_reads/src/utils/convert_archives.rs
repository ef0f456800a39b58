/*
    Convert downloaded archives to FASTQ
        one fasterq-dump per accession, four at a time
        afterwards check the expected FASTQ files exist
            se: <acc>.fastq
            pe: <acc>_1.fastq, <acc>_2.fastq
        a failed accession is logged and the rest carry on
*/

use std::path::Path;
use std::sync::{Arc, Mutex};
use threadpool::ThreadPool;
use log::{debug, error, info, warn};
use read_pipeline::{AccessionList, Ending, PipelineError, Result, Tools};

pub const CONVERSION_WORKERS: usize = 4;

#[derive(Debug)]
pub struct ConversionOutcome {
    pub accession: String,
    pub result: Result<()>,
}

pub fn convert_archives(accessions: &AccessionList, ending: Ending, tools: &Tools,
                        out_dir: &Path, verbose: bool) -> Vec<ConversionOutcome> {
    let outcomes: Arc<Mutex<Vec<ConversionOutcome>>> = Arc::new(Mutex::new(
                                                        Vec::with_capacity(accessions.len())));
    let tools = Arc::new(tools.clone());
    let pool = ThreadPool::new(CONVERSION_WORKERS);
    for accession in accessions {
        debug!("Queueing conversion of {}", accession);
        let arc_outcomes = Arc::clone(&outcomes);
        let tools = Arc::clone(&tools);
        let accession = accession.clone();
        let out_dir = out_dir.to_path_buf();
        pool.execute(move || {
            let result = convert_accession(&accession, ending, &tools, &out_dir, verbose);
            if let Err(e) = &result {
                error!("Error: {}", e);
            }
            let mut guard = arc_outcomes.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            guard.push(ConversionOutcome { accession, result });
        });
    }
    pool.join();
    if pool.panic_count() > 0 {
        error!("{} conversion workers panicked", pool.panic_count());
    }
    info!("Threadpool jobs complete");
    let mut guard = outcomes.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    std::mem::take(&mut *guard)
}

fn convert_accession(accession: &str, ending: Ending, tools: &Tools, out_dir: &Path,
                     verbose: bool) -> Result<()> {
    let run = tools.fasterq_dump(accession, out_dir).run(verbose);
    let missing = missing_outputs(accession, ending, out_dir);
    if !missing.is_empty() {
        return Err(PipelineError::MissingOutput {
            accession: accession.to_string(),
            missing,
        });
    }
    if let Err(e) = run {
        warn!("{} reported a failure but produced every expected file: {}", accession, e);
    }
    if verbose {
        info!("Conversion complete for {}", accession);
    }
    Ok(())
}

fn missing_outputs(accession: &str, ending: Ending, out_dir: &Path) -> Vec<String> {
    ending.fastq_names(accession)
        .into_iter()
        .filter(|name| !out_dir.join(name).exists())
        .collect()
}
