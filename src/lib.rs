// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod culture;
pub mod fit;
pub mod io;
pub mod organization;
pub mod recommendations;
pub mod risk;
pub mod scoring;
pub mod team;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    CollectiveProfile, Error, Priority, Result, Trait, TraitDiversity, TraitProfile, TraitScores,
};

pub use crate::config::{DomainPolicy, RiskThresholds, TraitmapConfig};

pub use crate::culture::{classify, CultureType};

pub use crate::fit::{ComplementaryFit, ExecutiveFitScorer, ExecutiveOrgFit};

pub use crate::organization::{
    EmergentProperties, HealthMetrics, InteractionMatrix, OrganizationalProfile,
    OrganizationalProfileBuilder, ProfileTrend,
};

pub use crate::recommendations::{Recommendation, RecommendationPlan};

pub use crate::risk::{RiskFactor, RiskIdentifier, RiskKind, Severity};

pub use crate::scoring::{CompositeScores, DynamicPredictions, Score0To1, Score0To100};

pub use crate::team::{
    OptimalAddition, RoleAssignment, RoleLibrary, TeamComposition, TeamCompositionAnalyzer,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
