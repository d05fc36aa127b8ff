pub mod input;
pub mod output;

pub use input::{read_assignments, read_json, read_matrix, read_profile, read_profiles};
pub use output::{
    create_writer, BatchEntry, JsonWriter, OrganizationReport, OutputFormat, OutputWriter, Report,
    TerminalWriter,
};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
