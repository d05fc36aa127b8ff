use crate::config::TraitmapConfig;
use crate::io::{self, BatchEntry, OutputFormat, Report};
use crate::organization::OrganizationalProfileBuilder;
use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct BatchConfig {
    pub files: Vec<PathBuf>,
    pub jobs: usize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

fn analyze_file(builder: &OrganizationalProfileBuilder, path: &Path) -> BatchEntry {
    let outcome = io::read_profiles(path).and_then(|profiles| builder.build(&profiles, None));

    match outcome {
        Ok(profile) => BatchEntry {
            path: path.to_path_buf(),
            profile: Some(profile),
            error: None,
        },
        Err(e) => {
            log::warn!("Skipping {}: {}", path.display(), e);
            BatchEntry {
                path: path.to_path_buf(),
                profile: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Profile every file, keeping input order. A failing file becomes an
/// error entry and does not stop the others.
pub fn analyze_files(
    builder: &OrganizationalProfileBuilder,
    files: &[PathBuf],
    jobs: usize,
) -> Result<Vec<BatchEntry>> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    log::debug!(
        "Analyzing {} files on {} threads",
        files.len(),
        pool.current_num_threads()
    );

    Ok(pool.install(|| {
        files
            .par_iter()
            .map(|path| analyze_file(builder, path))
            .collect()
    }))
}

pub fn handle_batch(settings: &TraitmapConfig, config: BatchConfig) -> Result<()> {
    let builder = OrganizationalProfileBuilder::from_config(settings);
    let entries = analyze_files(&builder, &config.files, config.jobs)?;
    let failed = entries.iter().filter(|entry| entry.error.is_some()).count();

    let mut writer = io::create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&Report::Batch(entries))?;

    if failed > 0 {
        anyhow::bail!("{} of {} files could not be analyzed", failed, config.files.len());
    }
    Ok(())
}
