pub mod cleanup;
pub mod convert_archives;
pub mod download;
pub mod get_args;
