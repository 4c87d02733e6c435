//! Skill gap: which of a role's required skills the user lacks, and how much
//! of the role they already cover.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Comparison form of a skill name.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    /// Role skills the user lacks, in role order and display case.
    pub missing: Vec<String>,
    pub match_score: u32, // 0 – 100
}

/// Compares a user's skills against a role's required skills.
///
/// Each role skill is checked on its own, so a skill listed twice by the role
/// and absent from the user set shows up twice in `missing`. A role with no
/// skills is a full match.
pub fn evaluate(user_skills: &[String], role_skills: &[String]) -> SkillGap {
    let have: HashSet<String> = user_skills.iter().map(|s| normalize_skill(s)).collect();

    let missing: Vec<String> = role_skills
        .iter()
        .filter(|s| !have.contains(&normalize_skill(s)))
        .cloned()
        .collect();

    let total = role_skills.len().max(1);
    let covered = total.saturating_sub(missing.len());
    // Ties round to even, so 12.5 -> 12.
    let match_score = (covered as f64 / total as f64 * 100.0).round_ties_even() as u32;

    SkillGap {
        missing,
        match_score,
    }
}
