//! JSON input documents for the command line.
//!
//! Profiles are read as a bare array of trait records; an executive is a
//! single record; a matrix is an array of rows; role assignments are an
//! array of `{ "memberIndex", "role", "target"? }` objects.

use crate::core::{Result, ResultExt, TraitProfile};
use crate::organization::InteractionMatrix;
use crate::team::RoleAssignment;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let load = || -> Result<T> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    };
    load().context(format!("reading {}", path.display()))
}

pub fn read_profiles(path: &Path) -> Result<Vec<TraitProfile>> {
    read_json(path)
}

pub fn read_profile(path: &Path) -> Result<TraitProfile> {
    read_json(path)
}

pub fn read_matrix(path: &Path) -> Result<InteractionMatrix> {
    read_json(path)
}

pub fn read_assignments(path: &Path) -> Result<Vec<RoleAssignment>> {
    read_json(path)
}
