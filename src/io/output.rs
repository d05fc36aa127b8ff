use crate::core::{CollectiveProfile, Trait};
use crate::fit::ExecutiveOrgFit;
use crate::organization::{OrganizationalProfile, ProfileTrend, TrendDirection};
use crate::recommendations::{Horizon, RecommendationPlan};
use crate::risk::{RiskFactor, Severity};
use crate::scoring::{CompositeScores, Score0To100};
use crate::team::TeamComposition;
use colored::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Outcome of analyzing one file in a batch run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<OrganizationalProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An organizational profile, optionally compared with an earlier one.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationReport {
    #[serde(flatten)]
    pub profile: OrganizationalProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<ProfileTrend>,
}

/// Anything a command can print.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Organization(OrganizationReport),
    Team(TeamComposition),
    Fit(ExecutiveOrgFit),
    Batch(Vec<BatchEntry>),
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Organization(report) => {
                self.write_organization(&report.profile)?;
                if let Some(trend) = &report.trend {
                    self.write_trend(trend)?;
                }
            }
            Report::Team(team) => self.write_team(team)?,
            Report::Fit(fit) => self.write_fit(fit)?,
            Report::Batch(entries) => self.write_batch(entries)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_organization(&mut self, profile: &OrganizationalProfile) -> anyhow::Result<()> {
        self.write_header("Organizational Profile")?;
        self.write_collective(&profile.collective)?;

        writeln!(
            self.writer,
            "Culture: {} - {}",
            profile.culture_type.label().bold(),
            profile.culture_description
        )?;
        writeln!(self.writer)?;

        self.write_composite("Composite scores", &profile.composite_scores)?;

        let health = &profile.health_metrics;
        writeln!(self.writer, "Health:")?;
        self.write_score_row("Psychological safety", health.psychological_safety, true)?;
        self.write_score_row("Innovation climate", health.innovation_climate, true)?;
        self.write_score_row("Resilience", health.resilience, true)?;
        self.write_score_row("Performance culture", health.performance_culture, true)?;
        self.write_score_row("Overall", health.overall_health, true)?;
        writeln!(self.writer)?;

        let emergent = &profile.emergent_properties;
        writeln!(self.writer, "Emergent properties:")?;
        self.write_score_row("Collective intelligence", emergent.collective_intelligence, true)?;
        self.write_score_row("Change readiness", emergent.change_readiness, true)?;
        self.write_score_row("Collaboration strength", emergent.collaboration_strength, true)?;
        writeln!(
            self.writer,
            "  {:<28} {:?}",
            "Decision making", emergent.decision_making_style
        )?;
        if let Some(interaction) = &emergent.interaction {
            writeln!(
                self.writer,
                "  {:<28} density {:.2}, reciprocity {:.2}, isolated {:?}",
                "Interaction", interaction.density, interaction.reciprocity, interaction.isolated_members
            )?;
        }
        writeln!(self.writer)?;

        self.write_risks(&profile.risks)?;
        self.write_recommendations(&profile.recommendations)?;
        Ok(())
    }

    fn write_trend(&mut self, trend: &ProfileTrend) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        let direction = match trend.direction {
            TrendDirection::Improving => "improving".green(),
            TrendDirection::Stable => "stable".normal(),
            TrendDirection::Declining => "declining".red(),
        };
        writeln!(
            self.writer,
            "Trend: {} (health {:+.1})",
            direction, trend.health_delta
        )?;
        for (t, delta) in trend.trait_deltas.iter() {
            writeln!(self.writer, "  {:<28} {:+.2}", t.name(), delta)?;
        }
        if trend.culture_changed {
            writeln!(self.writer, "  {}", "Culture type changed".yellow())?;
        }
        Ok(())
    }

    fn write_team(&mut self, team: &TeamComposition) -> anyhow::Result<()> {
        self.write_header("Team Composition")?;
        self.write_collective(&team.collective)?;
        self.write_composite("Dynamic predictions", &team.dynamic_predictions)?;

        if !team.role_fit_scores.is_empty() {
            writeln!(self.writer, "Role fit:")?;
            for (member, fit) in &team.role_fit_scores {
                let label = format!("member {} as {}", member, fit.role);
                self.write_score_row(&label, fit.score.denormalize(), true)?;
            }
            writeln!(self.writer)?;
        }

        let additions = &team.optimal_additions;
        writeln!(self.writer, "Next hire target:")?;
        for t in Trait::ALL {
            writeln!(
                self.writer,
                "  {:<28} {:.1}",
                t.name(),
                additions.target_profile.get(t)
            )?;
        }
        for gap in &additions.gaps {
            writeln!(
                self.writer,
                "  {} {} gap: mean {:.2}, target {:.1} ({})",
                "•".yellow(),
                gap.trait_name,
                gap.current_mean,
                gap.target,
                gap.priority
            )?;
        }
        writeln!(self.writer)?;

        self.write_risks(&team.risks)?;
        self.write_recommendations(&team.recommendations)?;
        Ok(())
    }

    fn write_fit(&mut self, fit: &ExecutiveOrgFit) -> anyhow::Result<()> {
        self.write_header("Executive Fit")?;

        writeln!(self.writer, "Alignment:")?;
        for (t, value) in fit.trait_alignment.iter() {
            writeln!(self.writer, "  {:<28} {:.2}", t.name(), value)?;
        }
        self.write_score_row("Overall fit", fit.overall_fit_score.denormalize(), true)?;
        writeln!(self.writer)?;

        let complementary = &fit.complementary_fit;
        if let Some(score) = complementary.complementarity_score {
            writeln!(
                self.writer,
                "Complementarity: {:.2} (adds {:?}, shares {:?})",
                score.value(),
                complementary.strengths_added,
                complementary.shared_weaknesses
            )?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "Recommendations:")?;
        for line in &fit.recommendations {
            writeln!(self.writer, "  - {line}")?;
        }
        Ok(())
    }

    fn write_batch(&mut self, entries: &[BatchEntry]) -> anyhow::Result<()> {
        self.write_header("Batch Analysis")?;
        for entry in entries {
            match (&entry.profile, &entry.error) {
                (Some(profile), _) => writeln!(
                    self.writer,
                    "{} {}: {} culture, health {}, {} risks",
                    "✓".green(),
                    entry.path.display(),
                    profile.culture_type.label(),
                    profile.health_metrics.overall_health,
                    profile.risks.len()
                )?,
                (None, error) => writeln!(
                    self.writer,
                    "{} {}: {}",
                    "✗".red(),
                    entry.path.display(),
                    error.as_deref().unwrap_or("unknown error").red()
                )?,
            }
        }
        Ok(())
    }

    fn write_collective(&mut self, collective: &CollectiveProfile) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Collective traits ({} profiles):",
            collective.sample_size
        )?;
        for t in Trait::ALL {
            writeln!(
                self.writer,
                "  {:<28} {:.2} (variance {:.2})",
                t.name(),
                collective.mean_traits.get(t),
                collective.trait_diversity.get(t)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_composite(&mut self, title: &str, scores: &CompositeScores) -> anyhow::Result<()> {
        writeln!(self.writer, "{title}:")?;
        for (name, score) in scores.iter() {
            self.write_score_row(name, score, name != "conflictProbability")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_score_row(
        &mut self,
        label: &str,
        score: Score0To100,
        higher_is_better: bool,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "  {:<28} {}",
            label,
            colorize_score(score, higher_is_better)
        )?;
        Ok(())
    }

    fn write_risks(&mut self, risks: &[RiskFactor]) -> anyhow::Result<()> {
        if risks.is_empty() {
            writeln!(self.writer, "{} No risks identified", "✓".green())?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "Risks ({}):", risks.len())?;
        for risk in risks {
            let severity = match risk.severity {
                Severity::High => risk.severity.to_string().red().bold(),
                Severity::Medium => risk.severity.to_string().yellow(),
                Severity::Low => risk.severity.to_string().normal(),
            };
            writeln!(
                self.writer,
                "  [{}] {}: {}",
                severity, risk.kind, risk.description
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, plan: &RecommendationPlan) -> anyhow::Result<()> {
        if plan.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "Recommendations:")?;
        for (horizon, recommendation) in plan.all() {
            writeln!(
                self.writer,
                "  {} {} ({}): {}",
                horizon_label(horizon).cyan(),
                recommendation.area.bold(),
                recommendation.priority,
                recommendation.description
            )?;
            for initiative in &recommendation.initiatives {
                writeln!(self.writer, "      - {initiative}")?;
            }
        }
        Ok(())
    }
}

fn horizon_label(horizon: Horizon) -> &'static str {
    match horizon {
        Horizon::Immediate => "[immediate]",
        Horizon::ShortTerm => "[short term]",
        Horizon::LongTerm => "[long term]",
    }
}

fn colorize_score(score: Score0To100, higher_is_better: bool) -> ColoredString {
    let value = score.value();
    let goodness = if higher_is_better { value } else { 100.0 - value };
    let text = format!("{value:.1}");
    match goodness {
        x if x >= 70.0 => text.green(),
        x if x >= 50.0 => text.yellow(),
        _ => text.red(),
    }
}

/// Writer for `format`, targeting `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => {
            colored::control::set_override(false);
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
