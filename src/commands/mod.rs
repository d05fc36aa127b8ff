//! CLI command implementations for traitmap.
//!
//! Available commands:
//! - **org**: Build an organizational profile, optionally compared with an earlier one
//! - **team**: Analyze team composition and role fit
//! - **fit**: Score an executive against an organization
//! - **batch**: Profile many organizations in parallel
//! - **init**: Write a default `.traitmap.toml`

pub mod analyze;
pub mod batch;
pub mod init;

pub use analyze::{handle_fit, handle_org, handle_team, FitConfig, OrgConfig, TeamConfig};
pub use batch::{handle_batch, BatchConfig};
pub use init::init_config;
