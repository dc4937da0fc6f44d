//! Employee HTTP Routes
//!
//! CRUD and count endpoints under `/api/employees`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::errors::ApiResult;
use crate::employee::{Employee, EmployeeDetails, EmployeeId, EmployeeService, UpdateOutcome};

// ==================
// Employee Routes
// ==================

/// Create employee routes
pub fn employee_routes(service: EmployeeService) -> Router {
    Router::new()
        .route("/api/employees", get(list_handler).post(create_handler))
        .route("/api/employees/count", get(count_handler))
        .route(
            "/api/employees/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(service)
}

// ==================
// Handlers
// ==================

async fn list_handler(State(service): State<EmployeeService>) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(service.get_all().await?))
}

async fn get_handler(
    State(service): State<EmployeeService>,
    Path(id): Path<EmployeeId>,
) -> ApiResult<Response> {
    let response = match service.get_by_id(id).await? {
        Some(employee) => Json(employee).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

async fn create_handler(
    State(service): State<EmployeeService>,
    Json(details): Json<EmployeeDetails>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let employee = service.create(details).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn update_handler(
    State(service): State<EmployeeService>,
    Path(id): Path<EmployeeId>,
    Json(details): Json<EmployeeDetails>,
) -> ApiResult<Response> {
    let response = match service.update(id, details).await? {
        UpdateOutcome::Updated(employee) => Json(employee).into_response(),
        UpdateOutcome::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

async fn delete_handler(
    State(service): State<EmployeeService>,
    Path(id): Path<EmployeeId>,
) -> ApiResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn count_handler(State(service): State<EmployeeService>) -> ApiResult<Json<u64>> {
    Ok(Json(service.count().await?))
}
