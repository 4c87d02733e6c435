//! Recommendations: pluggable, trait-based source of certifications, learning
//! resources and job listings for a role and its skill gap.
//!
//! Default: `StaticRecommender`, which matches against the embedded
//! certification library and synthesizes placeholder listings.
//!
//! `AppState` holds an `Arc<dyn Recommender>`, so a live provider can replace
//! it without touching the evaluator, the filter, or the handlers.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::gap::normalize_skill;
use crate::errors::AppError;
use crate::models::certification::{Certification, CERT_LIBRARY};
use crate::models::role::Role;

const MAX_CERTIFICATIONS: usize = 4;
const MAX_LEARNING_ITEMS: usize = 4;
const MAX_REASON_SKILLS: usize = 3;
const REMOTE: &str = "Remote";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationPick {
    pub name: String,
    pub provider: String,
    pub level: String,
    pub skills: Vec<String>,
    pub reason: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningItem {
    pub title: String,
    pub provider: String,
    pub skill: String,
    pub format: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub certifications: Vec<CertificationPick>,
    pub learning: Vec<LearningItem>,
    pub job_listings: Vec<JobListing>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(
        &self,
        role: &Role,
        missing_skills: &[String],
        location: &str,
    ) -> Result<Recommendations, AppError>;
}

/// Deterministic recommender over the embedded certification library.
/// No provider or job board is queried.
pub struct StaticRecommender;

#[async_trait]
impl Recommender for StaticRecommender {
    async fn recommend(
        &self,
        role: &Role,
        missing_skills: &[String],
        location: &str,
    ) -> Result<Recommendations, AppError> {
        Ok(Recommendations {
            certifications: recommend_certifications(CERT_LIBRARY, role, missing_skills),
            learning: learning_path(missing_skills),
            job_listings: job_listings(role, location),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-computations
// ────────────────────────────────────────────────────────────────────────────

/// Picks library entries that cover a missing skill or are tagged with the
/// role's category. Library order is kept; at most four are returned.
pub fn recommend_certifications(
    library: &[Certification],
    role: &Role,
    missing_skills: &[String],
) -> Vec<CertificationPick> {
    let missing: HashSet<String> = missing_skills.iter().map(|s| normalize_skill(s)).collect();
    let category_tag = role.category.trim().to_lowercase();

    library
        .iter()
        .filter_map(|cert| {
            let covered = covered_skills(cert, &missing);
            let category_match = cert.tags.iter().any(|t| t.to_lowercase() == category_tag);
            if covered.is_empty() && !category_match {
                return None;
            }

            let reason = if covered.is_empty() {
                format!("Recommended based on your target role in {}.", role.category)
            } else {
                let shown: Vec<&str> = covered
                    .iter()
                    .take(MAX_REASON_SKILLS)
                    .map(String::as_str)
                    .collect();
                format!(
                    "Recommended because it helps you build: {}.",
                    shown.join(", ")
                )
            };

            Some(CertificationPick {
                name: cert.name.to_string(),
                provider: cert.provider.to_string(),
                level: cert.level.to_string(),
                skills: cert.skills.iter().map(|s| s.to_string()).collect(),
                reason,
                link: cert.link.to_string(),
            })
        })
        .take(MAX_CERTIFICATIONS)
        .collect()
}

/// Normalized certification skills that close part of the gap, in the
/// certification's own skill order.
fn covered_skills(cert: &Certification, missing: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    cert.skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| missing.contains(s) && seen.insert(s.clone()))
        .collect()
}

/// One course stub per missing skill, first four only.
pub fn learning_path(missing_skills: &[String]) -> Vec<LearningItem> {
    missing_skills
        .iter()
        .take(MAX_LEARNING_ITEMS)
        .map(|skill| LearningItem {
            title: format!("{skill} Fundamentals"),
            provider: "edX".to_string(),
            skill: skill.clone(),
            format: "Course".to_string(),
            link: String::new(),
        })
        .collect()
}

/// Three sample listings built from the role title and slices of its skills.
/// A blank profile location falls back to "Remote".
pub fn job_listings(role: &Role, location: &str) -> Vec<JobListing> {
    let location = if location.trim().is_empty() {
        REMOTE
    } else {
        location
    };

    vec![
        JobListing {
            title: format!("{} (Entry-Level)", role.title),
            company: "Sample Company A".to_string(),
            location: location.to_string(),
            skills: skill_slice(&role.top_skills, 0, 4),
            link: String::new(),
        },
        JobListing {
            title: format!("Junior {}", role.title),
            company: "Sample Company B".to_string(),
            location: location.to_string(),
            skills: skill_slice(&role.top_skills, 1, 5),
            link: String::new(),
        },
        JobListing {
            title: format!("{} Intern", role.title),
            company: "Sample Company C".to_string(),
            location: REMOTE.to_string(),
            skills: skill_slice(&role.top_skills, 0, 3),
            link: String::new(),
        },
    ]
}

fn skill_slice(skills: &[String], start: usize, end: usize) -> Vec<String> {
    let end = end.min(skills.len());
    let start = start.min(end);
    skills[start..end].to_vec()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
