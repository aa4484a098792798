use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::database::models::{TeamInput, TeamRecord};

/// Outcome of scanning the existing registrations for identifying-field
/// collisions. Returned to the client verbatim on a 409.
///
/// Only colliding emails are itemized; team-name and srn matches set the
/// flag but are summarized without enumeration, matching the behavior of
/// the system this replaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckResult {
    pub has_duplicates: bool,
    pub duplicate_emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DuplicateCheckResult {
    pub fn clean() -> Self {
        Self {
            has_duplicates: false,
            duplicate_emails: Vec::new(),
            message: None,
        }
    }
}

/// Decide whether `candidate` collides with any stored team. Pure and
/// non-mutating; "no collision" is the normal outcome, not an error.
///
/// A stored team collides when its team name equals the candidate's
/// (case-sensitive), when any captain-or-member email matches a candidate
/// email (case-insensitive), or when any captain-or-member srn matches a
/// candidate srn (exact).
pub fn check_team(candidate: &TeamInput, existing: &[TeamRecord]) -> DuplicateCheckResult {
    let candidate_emails: HashSet<String> = candidate
        .roster()
        .map(|m| m.email.to_lowercase())
        .collect();
    let candidate_srns: HashSet<&str> = candidate.roster().map(|m| m.srn.as_str()).collect();

    let mut duplicate_emails: Vec<String> = Vec::new();
    let mut seen_emails: HashSet<String> = HashSet::new();
    let mut name_or_srn_collision = false;

    for team in existing {
        if team.team_name == candidate.team_name {
            name_or_srn_collision = true;
        }

        for member in team.roster() {
            let email = member.email.to_lowercase();
            if candidate_emails.contains(&email) && seen_emails.insert(email.clone()) {
                duplicate_emails.push(email);
            }
            if candidate_srns.contains(member.srn.as_str()) {
                name_or_srn_collision = true;
            }
        }
    }

    let has_duplicates = !duplicate_emails.is_empty() || name_or_srn_collision;
    let message = if !duplicate_emails.is_empty() {
        Some(format!(
            "Duplicate emails found: {}",
            duplicate_emails.join(", ")
        ))
    } else if name_or_srn_collision {
        Some("Duplicate SRN or team name found.".to_string())
    } else {
        None
    };

    DuplicateCheckResult {
        has_duplicates,
        duplicate_emails,
        message,
    }
}
