pub mod accessions;
pub mod error;
pub mod layout;
pub mod quality_report;
pub mod sample;
pub mod tool_command;
