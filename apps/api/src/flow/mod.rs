//! User-facing operations.
//!
//! Each operation receives the session state explicitly, mutates it in place
//! when needed, and returns an [`Outcome`]: a view to render or a step to
//! redirect to. Missing prerequisites always redirect, never error.

pub mod handlers;
pub mod outcome;

use tracing::{info, warn};

use crate::analysis::recommend::Recommender;
use crate::analysis::results::build_results;
use crate::catalog::filter::{distinct_categories, filter_roles};
use crate::catalog::loader::find_role;
use crate::catalog::RoleCatalog;
use crate::errors::AppError;
use crate::flow::outcome::{Outcome, RolesView, Step, View};
use crate::models::profile::{Profile, ProfileForm, SessionState};

pub fn view_home() -> Outcome {
    Outcome::Rendered(View::Home)
}

/// Shows the profile form, pre-filled from the session when present.
pub fn view_profile(session: &SessionState) -> Outcome {
    Outcome::Rendered(View::Profile {
        existing: session.profile.clone(),
    })
}

pub fn submit_profile(session: &mut SessionState, form: &ProfileForm) -> Outcome {
    session.profile = Some(Profile::from_form(form));
    Outcome::Redirect(Step::Roles)
}

pub fn list_roles(
    session: &SessionState,
    catalog: &RoleCatalog,
    query: &str,
    category: &str,
) -> Result<Outcome, AppError> {
    let Some(profile) = &session.profile else {
        return Ok(Outcome::Redirect(Step::Profile));
    };

    let roles = catalog.load()?;
    let categories = distinct_categories(&roles);
    let filtered = filter_roles(&roles, query, category);

    Ok(Outcome::Rendered(View::Roles(RolesView {
        profile: profile.clone(),
        roles: filtered,
        categories,
        q: query.to_string(),
        cat: category.to_string(),
    })))
}

/// Records the chosen role. Whether it exists is checked when results are
/// built, so a role deleted in between is handled in one place.
pub fn choose_role(session: &mut SessionState, role_id: &str) -> Outcome {
    if session.profile.is_none() {
        return Outcome::Redirect(Step::Profile);
    }

    let role_id = role_id.trim();
    if role_id.is_empty() {
        return Outcome::Redirect(Step::Roles);
    }

    session.selected_role_id = Some(role_id.to_string());
    Outcome::Redirect(Step::Results)
}

pub async fn view_results(
    session: &mut SessionState,
    catalog: &RoleCatalog,
    recommender: &dyn Recommender,
) -> Result<Outcome, AppError> {
    let Some(profile) = session.profile.clone() else {
        return Ok(Outcome::Redirect(Step::Profile));
    };
    let Some(role_id) = session.selected_role_id.clone() else {
        return Ok(Outcome::Redirect(Step::Roles));
    };

    let roles = catalog.load()?;
    let Some(role) = find_role(&role_id, &roles) else {
        warn!("Selected role '{role_id}' is no longer in the catalog; clearing selection");
        session.selected_role_id = None;
        return Ok(Outcome::Redirect(Step::Roles));
    };

    let results = build_results(&profile, role, recommender).await?;
    info!(
        "Results for role '{}': match score {}, {} missing skills",
        role.id,
        results.match_score,
        results.missing_skills.len()
    );

    Ok(Outcome::Rendered(View::Results(Box::new(results))))
}

pub fn reset_session(session: &mut SessionState) -> Outcome {
    session.clear();
    Outcome::Redirect(Step::Home)
}
