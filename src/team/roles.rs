//! Role targets and personality-role fit.

use crate::core::{Error, Result, TraitProfile};
use crate::fit::trait_alignment;
use crate::scoring::Score0To1;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static BUILTIN_ROLES: Lazy<BTreeMap<String, TraitProfile>> = Lazy::new(|| {
    [
        ("leader", TraitProfile::new(3.8, 4.0, 4.2, 3.5, 2.0)),
        ("innovator", TraitProfile::new(4.6, 3.0, 3.5, 3.2, 2.5)),
        ("executor", TraitProfile::new(3.0, 4.5, 3.0, 3.3, 2.2)),
        ("coordinator", TraitProfile::new(3.3, 3.8, 3.8, 4.3, 2.2)),
        ("analyst", TraitProfile::new(3.8, 4.2, 2.5, 3.2, 2.3)),
    ]
    .into_iter()
    .map(|(name, target)| (name.to_string(), target))
    .collect()
});

fn role_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Named ideal-trait targets.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleLibrary {
    roles: BTreeMap<String, TraitProfile>,
}

impl Default for RoleLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RoleLibrary {
    /// Built-in targets: leader, innovator, executor, coordinator, analyst.
    pub fn builtin() -> Self {
        Self {
            roles: BUILTIN_ROLES.clone(),
        }
    }

    /// Add roles, replacing built-ins of the same name.
    pub fn with_roles<'a>(
        mut self,
        roles: impl IntoIterator<Item = (&'a String, &'a TraitProfile)>,
    ) -> Self {
        for (name, target) in roles {
            self.roles.insert(role_key(name), *target);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&TraitProfile> {
        self.roles.get(&role_key(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }
}

/// A team member filling a role.
///
/// `target` overrides the library's target for `role` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub member_index: usize,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TraitProfile>,
}

impl RoleAssignment {
    pub fn new(member_index: usize, role: impl Into<String>) -> Self {
        Self {
            member_index,
            role: role.into(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: TraitProfile) -> Self {
        self.target = Some(target);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleFit {
    pub role: String,
    pub score: Score0To1,
}

/// Mean per-trait alignment between a member and a role target, in [0, 1].
pub fn role_fit(member: &TraitProfile, target: &TraitProfile) -> Score0To1 {
    Score0To1::new(trait_alignment(member, &target.scores()).average())
}

/// Role fit per assigned member, keyed by member index.
pub fn score_assignments(
    members: &[TraitProfile],
    assignments: &[RoleAssignment],
    library: &RoleLibrary,
) -> Result<BTreeMap<usize, RoleFit>> {
    let mut scores = BTreeMap::new();

    for assignment in assignments {
        let member = members.get(assignment.member_index).ok_or_else(|| {
            Error::invalid_input(format!(
                "role '{}' assigned to member {} but the team has {} members",
                assignment.role,
                assignment.member_index,
                members.len()
            ))
        })?;

        let target = match &assignment.target {
            Some(target) => {
                if let Some((t, value)) = target.first_out_of_domain() {
                    return Err(Error::invalid_input(format!(
                        "role '{}' target has {} = {} outside [1, 5]",
                        assignment.role, t, value
                    )));
                }
                target
            }
            None => library.get(&assignment.role).ok_or_else(|| {
                Error::invalid_input(format!(
                    "unknown role '{}' and no explicit target given",
                    assignment.role
                ))
            })?,
        };

        let fit = RoleFit {
            role: assignment.role.clone(),
            score: role_fit(member, target),
        };
        if scores.insert(assignment.member_index, fit).is_some() {
            return Err(Error::invalid_input(format!(
                "member {} has more than one role assignment",
                assignment.member_index
            )));
        }
    }

    Ok(scores)
}
