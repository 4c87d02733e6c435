use serde::{Deserialize, Serialize};

use crate::analysis::gap::evaluate;
use crate::analysis::recommend::{CertificationPick, JobListing, LearningItem, Recommender};
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::role::Role;

/// Everything the results page shows for one profile and role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsView {
    pub degree: String,
    pub location: String,
    pub user_skills: Vec<String>,
    pub selected_role: String,
    pub top_skills_in_jobs: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_score: u32,
    pub recommended_certs: Vec<CertificationPick>,
    pub recommended_learning: Vec<LearningItem>,
    pub job_listings: Vec<JobListing>,
}

/// Scores the profile against the role and gathers recommendations.
pub async fn build_results(
    profile: &Profile,
    role: &Role,
    recommender: &dyn Recommender,
) -> Result<ResultsView, AppError> {
    let gap = evaluate(&profile.user_skills, &role.top_skills);
    let recs = recommender
        .recommend(role, &gap.missing, &profile.location)
        .await?;

    Ok(ResultsView {
        degree: profile.degree.clone(),
        location: profile.location.clone(),
        user_skills: profile.user_skills.clone(),
        selected_role: role.title.clone(),
        top_skills_in_jobs: role.top_skills.clone(),
        missing_skills: gap.missing,
        match_score: gap.match_score,
        recommended_certs: recs.certifications,
        recommended_learning: recs.learning,
        job_listings: recs.job_listings,
    })
}
