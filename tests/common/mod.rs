// Test utility module for traitmap integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use traitmap::TraitProfile;

/// The three-person organization used across the end-to-end tests.
pub fn spread_trio() -> Vec<TraitProfile> {
    vec![
        TraitProfile::new(4.0, 4.0, 3.0, 4.0, 2.0),
        TraitProfile::new(3.0, 3.0, 3.0, 3.0, 3.0),
        TraitProfile::new(5.0, 2.0, 4.0, 2.0, 4.0),
    ]
}

pub fn uniform(n: usize, value: f64) -> Vec<TraitProfile> {
    vec![TraitProfile::new(value, value, value, value, value); n]
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

/// Write `profiles` as a JSON array under `dir`.
pub fn write_profiles(dir: &Path, name: &str, profiles: &[TraitProfile]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(profiles).unwrap()).unwrap();
    path
}
