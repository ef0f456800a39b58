pub mod crop;
pub mod get_args;
pub mod trim_accessions;
