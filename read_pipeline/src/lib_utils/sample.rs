
// per-sample conventions: read layout and reference genome choice

use clap::ValueEnum;
use super::layout::FASTQ_EXTENSION;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Ending {
    /// Single-end: one FASTQ per accession
    Se,
    /// Paired-end: forward and reverse FASTQ per accession
    Pe,
}

impl Ending {
    pub fn fastq_names(&self, accession: &str) -> Vec<String> {
        match self {
            Ending::Se => vec![format!("{accession}.{FASTQ_EXTENSION}")],
            Ending::Pe => vec![
                format!("{accession}_1.{FASTQ_EXTENSION}"),
                format!("{accession}_2.{FASTQ_EXTENSION}"),
            ],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Organism {
    /// Mouse, mm10
    #[value(name = "Mus")]
    Mus,
    /// Human, GRCh38
    #[value(name = "Homo")]
    Homo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferencePaths {
    pub genome: &'static str,
    pub annotation: &'static str,
}

impl Organism {
    // consumed by the alignment and counting steps further downstream
    pub fn references(&self) -> ReferencePaths {
        match self {
            Organism::Mus => ReferencePaths {
                genome: "temporary/bowtie2/refGenomes/mm10.fasta",
                annotation: "temporary/feature_counts/data/mm10_RefSeq_exon.txt",
            },
            Organism::Homo => ReferencePaths {
                genome: "temporary/bowtie2/refGenomes/GRCh38_noalt_as",
                annotation: "temporary/feature_counts/data/hg38_RefSeq_exon.txt",
            },
        }
    }
}
