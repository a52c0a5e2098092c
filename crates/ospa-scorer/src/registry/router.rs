use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::export::export_file_name;
use super::service::{NominationService, NominationServiceError};
use super::store::CandidateStore;
use super::sync::SyncGateway;
use crate::scoring::{
    score_labeled, Candidate, CandidateId, InstanceEntry, InstanceId, InstanceList,
    InterviewDimension, InterviewRating, Level, Rank,
};

type SharedService<S, G> = Arc<NominationService<S, G>>;

/// Router builder exposing the candidate registry and the rubric lookup.
pub fn nomination_router<S, G>(service: SharedService<S, G>) -> Router
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    Router::new()
        .route(
            "/api/v1/candidates",
            get(list_handler::<S, G>).post(save_handler::<S, G>),
        )
        .route(
            "/api/v1/candidates/:candidate_id",
            get(fetch_handler::<S, G>).delete(delete_handler::<S, G>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/instances/:list",
            post(add_instance_handler::<S, G>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/instances/:list/:instance_id",
            delete(remove_instance_handler::<S, G>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/interview/:dimension",
            put(interview_handler::<S, G>),
        )
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/sync", post(sync_handler::<S, G>))
        .route("/api/v1/export", get(export_handler::<S, G>))
        .with_state(service)
}

/// Single rubric lookup keyed by a category label.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    pub category: String,
    pub level: Level,
    #[serde(default)]
    pub rank: Option<Rank>,
    #[serde(rename = "type", default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub category: String,
    pub points: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingRequest {
    pub rating: InterviewRating,
}

pub(crate) async fn list_handler<S, G>(State(service): State<SharedService<S, G>>) -> Response
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    match service.list() {
        Ok(candidates) => (StatusCode::OK, axum::Json(candidates)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn save_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    axum::Json(candidate): axum::Json<Candidate>,
) -> Response
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    match service.save(candidate).await {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn fetch_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    match service.get(&CandidateId(candidate_id)) {
        Ok(candidate) => (StatusCode::OK, axum::Json(candidate)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    match service.delete(&CandidateId(candidate_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn add_instance_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path((candidate_id, list)): Path<(String, String)>,
    axum::Json(entry): axum::Json<InstanceEntry>,
) -> Response
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    let list = match list.parse::<InstanceList>() {
        Ok(list) => list,
        Err(err) => return bad_request(err.to_string()),
    };

    match service.add_instance(&CandidateId(candidate_id), list, entry) {
        Ok((candidate, instance_id)) => {
            let payload = json!({
                "instance_id": instance_id,
                "candidate": candidate,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn remove_instance_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path((candidate_id, list, instance_id)): Path<(String, String, String)>,
) -> Response
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    let list = match list.parse::<InstanceList>() {
        Ok(list) => list,
        Err(err) => return bad_request(err.to_string()),
    };

    match service.remove_instance(&CandidateId(candidate_id), list, &InstanceId(instance_id)) {
        Ok(candidate) => (StatusCode::OK, axum::Json(candidate)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn interview_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path((candidate_id, dimension)): Path<(String, String)>,
    axum::Json(request): axum::Json<RatingRequest>,
) -> Response
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    let dimension = match dimension.parse::<InterviewDimension>() {
        Ok(dimension) => dimension,
        Err(err) => return bad_request(err.to_string()),
    };

    match service.rate_interview(&CandidateId(candidate_id), dimension, request.rating) {
        Ok(candidate) => (StatusCode::OK, axum::Json(candidate)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn score_handler(axum::Json(request): axum::Json<ScoreRequest>) -> Response {
    let points = score_labeled(
        &request.category,
        request.level,
        request.rank,
        request.role.as_deref(),
    );
    let payload = ScoreResponse {
        category: request.category,
        points,
    };
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn sync_handler<S, G>(State(service): State<SharedService<S, G>>) -> Response
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    let synced = match service.sync_all().await {
        Ok(synced) => synced,
        Err(err) => return error_response(err),
    };

    match service.last_sync() {
        Ok(last_sync) => {
            let payload = json!({
                "synced": synced,
                "last_sync": last_sync,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn export_handler<S, G>(State(service): State<SharedService<S, G>>) -> Response
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    match service.export_csv() {
        Ok(Some(body)) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                export_file_name(Local::now().date_naive())
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                body,
            )
                .into_response()
        }
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

fn bad_request(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn error_response(err: NominationServiceError) -> Response {
    let status = match &err {
        NominationServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        NominationServiceError::NotFound(_) | NominationServiceError::InstanceNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        NominationServiceError::Store(_) | NominationServiceError::Export(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
