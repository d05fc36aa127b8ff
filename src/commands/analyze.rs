use crate::config::TraitmapConfig;
use crate::fit::ExecutiveFitScorer;
use crate::io::{self, OrganizationReport, OutputFormat, Report};
use crate::organization::{self, OrganizationalProfile, OrganizationalProfileBuilder};
use crate::team::TeamCompositionAnalyzer;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct OrgConfig {
    pub profiles: PathBuf,
    pub matrix: Option<PathBuf>,
    pub previous: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub struct TeamConfig {
    pub profiles: PathBuf,
    pub roles: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub struct FitConfig {
    pub executive: PathBuf,
    pub profiles: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

fn emit(report: &Report, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let mut writer = io::create_writer(format, output)?;
    writer.write_report(report)?;
    if let Some(path) = output {
        log::info!("Wrote report to {}", path.display());
    }
    Ok(())
}

pub fn handle_org(settings: &TraitmapConfig, config: OrgConfig) -> Result<()> {
    let profiles = io::read_profiles(&config.profiles)?;
    let matrix = config
        .matrix
        .as_deref()
        .map(io::read_matrix)
        .transpose()?;

    let profile = OrganizationalProfileBuilder::from_config(settings)
        .build(&profiles, matrix.as_ref())
        .with_context(|| format!("Failed to profile {}", config.profiles.display()))?;

    let trend = match &config.previous {
        Some(path) => {
            let previous: OrganizationalProfile = io::read_json(path)?;
            Some(organization::compare(&previous, &profile))
        }
        None => None,
    };

    emit(
        &Report::Organization(OrganizationReport { profile, trend }),
        config.format,
        config.output.as_deref(),
    )
}

pub fn handle_team(settings: &TraitmapConfig, config: TeamConfig) -> Result<()> {
    let members = io::read_profiles(&config.profiles)?;
    let assignments = config
        .roles
        .as_deref()
        .map(io::read_assignments)
        .transpose()?;

    let composition = TeamCompositionAnalyzer::from_config(settings)
        .analyze(&members, assignments.as_deref())
        .with_context(|| format!("Failed to analyze team {}", config.profiles.display()))?;

    emit(
        &Report::Team(composition),
        config.format,
        config.output.as_deref(),
    )
}

pub fn handle_fit(settings: &TraitmapConfig, config: FitConfig) -> Result<()> {
    let executive = io::read_profile(&config.executive)?;
    let population = io::read_profiles(&config.profiles)?;

    let result = ExecutiveFitScorer::from_config(settings)
        .score_against_population(&executive, &population)
        .with_context(|| {
            format!(
                "Failed to score {} against {}",
                config.executive.display(),
                config.profiles.display()
            )
        })?;

    emit(&Report::Fit(result), config.format, config.output.as_deref())
}
