use axum::{
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

use crate::analysis::results::ResultsView;
use crate::models::profile::Profile;
use crate::models::role::Role;

/// Canonical pages a user can be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Home,
    Profile,
    Roles,
    Results,
}

impl Step {
    pub fn path(self) -> &'static str {
        match self {
            Step::Home => "/",
            Step::Profile => "/profile",
            Step::Roles => "/roles",
            Step::Results => "/results",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolesView {
    pub profile: Profile,
    pub roles: Vec<Role>,
    pub categories: Vec<String>,
    /// Query parameters echoed back as typed.
    pub q: String,
    pub cat: String,
}

/// Page payloads handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum View {
    Home,
    Profile { existing: Option<Profile> },
    Roles(RolesView),
    Results(Box<ResultsView>),
}

/// Result of a user-facing operation, independent of transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rendered(View),
    Redirect(Step),
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Rendered(view) => Json(view).into_response(),
            Outcome::Redirect(step) => Redirect::to(step.path()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::LOCATION, StatusCode};

    #[test]
    fn test_redirect_is_see_other_with_location() {
        let response = Outcome::Redirect(Step::Roles).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/roles");
    }

    #[test]
    fn test_view_serializes_with_tag() {
        let json = serde_json::to_value(View::Profile { existing: None }).unwrap();
        assert_eq!(json["view"], "profile");
        assert!(json["data"]["existing"].is_null());

        let home = serde_json::to_value(View::Home).unwrap();
        assert_eq!(home["view"], "home");
    }
}
