//! Axum route handlers. Each one loads the session, runs a flow operation,
//! saves what changed, and turns the outcome into a response.

use axum::{
    extract::{Form, Query, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::flow::{self, outcome::Outcome};
use crate::models::profile::ProfileForm;
use crate::session::{cookie::session_cookie, SessionContext};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RoleQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub cat: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRoleForm {
    #[serde(default)]
    pub role_id: String,
}

async fn open_session(state: &AppState, headers: &HeaderMap) -> Result<SessionContext, AppError> {
    SessionContext::load(state.sessions.as_ref(), headers, &state.config.session_cookie).await
}

async fn finish(
    state: &AppState,
    session: SessionContext,
    outcome: Outcome,
) -> Result<Response, AppError> {
    session.commit(state.sessions.as_ref()).await?;

    let mut response = outcome.into_response();
    if session.is_new && !session.state.is_empty() {
        if let Some(cookie) = session_cookie(&state.config.session_cookie, &session.id) {
            response.headers_mut().insert(SET_COOKIE, cookie);
        }
    }
    Ok(response)
}

/// GET /
pub async fn handle_home() -> Outcome {
    flow::view_home()
}

/// GET /profile
pub async fn handle_view_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let session = open_session(&state, &headers).await?;
    let outcome = flow::view_profile(&session.state);
    finish(&state, session, outcome).await
}

/// POST /profile
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let mut session = open_session(&state, &headers).await?;
    let outcome = flow::submit_profile(&mut session.state, &form);
    finish(&state, session, outcome).await
}

/// GET /roles?q=&cat=
pub async fn handle_list_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<RoleQuery>,
) -> Result<Response, AppError> {
    let session = open_session(&state, &headers).await?;
    let outcome = flow::list_roles(&session.state, &state.catalog, &params.q, &params.cat)?;
    finish(&state, session, outcome).await
}

/// POST /select-role
pub async fn handle_select_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SelectRoleForm>,
) -> Result<Response, AppError> {
    let mut session = open_session(&state, &headers).await?;
    let outcome = flow::choose_role(&mut session.state, &form.role_id);
    finish(&state, session, outcome).await
}

/// GET /results
pub async fn handle_results(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let mut session = open_session(&state, &headers).await?;
    let outcome = flow::view_results(
        &mut session.state,
        &state.catalog,
        state.recommender.as_ref(),
    )
    .await?;
    finish(&state, session, outcome).await
}

/// GET /reset
pub async fn handle_reset(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let mut session = open_session(&state, &headers).await?;
    let outcome = flow::reset_session(&mut session.state);
    finish(&state, session, outcome).await
}
