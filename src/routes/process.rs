use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::process_dto::{DeleteProcessResponse, ProcessDetailResponse, UpdateProcessPayload},
    error::{Error, Result},
    routes::parse_id,
    AppState,
};

#[utoipa::path(
    get,
    path = "/process/{id}",
    params(
        ("id" = i32, Path, description = "Process ID")
    ),
    responses(
        (status = 200, description = "Process with its candidates", body = ProcessDetailResponse),
        (status = 400, description = "Invalid process id"),
        (status = 404, description = "Process not found")
    )
)]
#[axum::debug_handler]
pub async fn get_process(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "Invalid process id")?;
    let (process, candidates) = state
        .process_service
        .get_with_candidates(id)
        .await?
        .ok_or_else(|| Error::NotFound("Proceso no encontrado".into()))?;
    Ok(Json(ProcessDetailResponse::new(process, candidates)))
}

#[utoipa::path(
    put,
    path = "/process/{id}",
    params(
        ("id" = i32, Path, description = "Process ID")
    ),
    request_body = UpdateProcessPayload,
    responses(
        (status = 200, description = "Process updated", body = Process),
        (status = 400, description = "Missing fields or invalid dates"),
        (status = 500, description = "Error updating process")
    )
)]
#[axum::debug_handler]
pub async fn update_process(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateProcessPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "Invalid process id")?;
    let Json(payload) = payload?;
    let update = payload.into_update()?;
    let process = state.process_service.update(id, update).await?;
    Ok(Json(process))
}

#[utoipa::path(
    delete,
    path = "/process/{id}",
    params(
        ("id" = i32, Path, description = "Process ID")
    ),
    responses(
        (status = 200, description = "Process deleted", body = DeleteProcessResponse),
        (status = 400, description = "Invalid process id"),
        (status = 500, description = "Error deleting process")
    )
)]
#[axum::debug_handler]
pub async fn delete_process(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "Invalid process id")?;
    let deleted_process = state.process_service.delete(id).await?;
    Ok(Json(DeleteProcessResponse {
        message: "Proceso eliminado con éxito".to_string(),
        deleted_process,
    }))
}
