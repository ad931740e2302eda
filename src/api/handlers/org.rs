//! Org request handlers: thin orchestration over the Org agent.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::api::extract::{CorrelationId, LoggedInUser};
use crate::api::state::AppState;
use crate::domain::{AgentError, NewOrg, NewTeam, OrgInfo};

fn login_required() -> AgentError {
    AgentError::status(401, "you must be logged in to perform that action")
}

/// GET /org/{scope}: the aggregate org page.
pub async fn show_org(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    LoggedInUser(bearer): LoggedInUser,
    Path(scope): Path<String>,
) -> Response {
    let Some(bearer) = bearer else {
        return state
            .error_page(&login_required(), &correlation_id)
            .into_response();
    };

    match state.org_agent(bearer).get(&scope).await {
        Ok(view) => {
            let context = serde_json::to_value(&view).unwrap_or(Value::Null);
            state.render_page("org/show", &context)
        }
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}

/// PUT /org
pub async fn create_org(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    LoggedInUser(bearer): LoggedInUser,
    Json(org): Json<NewOrg>,
) -> Response {
    let Some(bearer) = bearer else {
        return state
            .error_page(&login_required(), &correlation_id)
            .into_response();
    };

    match state.org_agent(bearer).create(&org).await {
        Ok(created) => Json(created).into_response(),
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}

/// POST /org/{scope}: full-object update.
pub async fn update_org(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    LoggedInUser(bearer): LoggedInUser,
    Path(scope): Path<String>,
    Json(mut org): Json<OrgInfo>,
) -> Response {
    let Some(bearer) = bearer else {
        return state
            .error_page(&login_required(), &correlation_id)
            .into_response();
    };

    // The path segment is authoritative for which org is being updated.
    org.name = scope;

    match state.org_agent(bearer).update(&org).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}

/// DELETE /org/{scope}
pub async fn delete_org(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    LoggedInUser(bearer): LoggedInUser,
    Path(scope): Path<String>,
) -> Response {
    let Some(bearer) = bearer else {
        return state
            .error_page(&login_required(), &correlation_id)
            .into_response();
    };

    match state.org_agent(bearer).delete(&scope).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}

/// PUT /org/{scope}/user
pub async fn add_user(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    LoggedInUser(bearer): LoggedInUser,
    Path(scope): Path<String>,
    Json(user): Json<Value>,
) -> Response {
    let Some(bearer) = bearer else {
        return state
            .error_page(&login_required(), &correlation_id)
            .into_response();
    };

    match state.org_agent(bearer).add_user(&scope, &user).await {
        Ok(added) => Json(added).into_response(),
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}

/// DELETE /org/{scope}/user/{user_id}
pub async fn remove_user(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    LoggedInUser(bearer): LoggedInUser,
    Path((scope, user_id)): Path<(String, String)>,
) -> Response {
    let Some(bearer) = bearer else {
        return state
            .error_page(&login_required(), &correlation_id)
            .into_response();
    };

    match state.org_agent(bearer).remove_user(&scope, &user_id).await {
        Ok(removed) => Json(removed).into_response(),
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}

/// PUT /org/{scope}/team
pub async fn add_team(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
    LoggedInUser(bearer): LoggedInUser,
    Path(scope): Path<String>,
    Json(mut team): Json<NewTeam>,
) -> Response {
    let Some(bearer) = bearer else {
        return state
            .error_page(&login_required(), &correlation_id)
            .into_response();
    };

    team.org_scope = scope;

    match state.org_agent(bearer).add_team(&team).await {
        Ok(added) => Json(added).into_response(),
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}
