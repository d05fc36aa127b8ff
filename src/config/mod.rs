//! `.traitmap.toml` configuration.
//!
//! ```toml
//! [validation]
//! out_of_domain = "reject"    # or "clamp"
//!
//! [thresholds.team]
//! max_size = 12
//!
//! [thresholds.organization]
//! max_agreeableness_variance = 0.5
//!
//! [roles.facilitator]
//! openness = 3.5
//! conscientiousness = 3.5
//! extraversion = 4.0
//! agreeableness = 4.5
//! neuroticism = 2.0
//! ```
//!
//! Composite-score weights are fixed and deliberately absent from the file.

mod core;
mod loader;
mod thresholds;

pub use core::{DomainPolicy, TraitmapConfig, ValidationConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{RiskThresholdOverrides, RiskThresholds, ThresholdsConfig};
