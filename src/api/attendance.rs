use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::engine::{AttendanceEngine, ClockInError, ClockOutError};
use crate::model::attendance::Attendance;

#[derive(Deserialize, ToSchema)]
pub struct ClockInRequest {
    #[schema(example = 1)]
    pub employee_id: i64,
}

/// Clock In
///
/// Opens a session for the employee. Failure precedence is fixed: unknown
/// employee, then missing address, then an already-open session.
#[utoipa::path(
    post,
    path = "/attendance/clock-in",
    request_body = ClockInRequest,
    responses(
        (status = 200, description = "Session opened", body = Attendance),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "detail": "Employee not found."
        })),
        (status = 400, description = "Missing address or already clocked in", body = Object, example = json!({
            "detail": "Employee already clocked in."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn clock_in(
    engine: web::Data<AttendanceEngine>,
    payload: web::Json<ClockInRequest>,
) -> impl Responder {
    match engine.clock_in(payload.employee_id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(ClockInError::EmployeeNotFound) => HttpResponse::NotFound().json(json!({
            "detail": "Employee not found."
        })),
        Err(ClockInError::AddressRequired) => HttpResponse::BadRequest().json(json!({
            "detail": "Employee must have an address to clock in."
        })),
        Err(ClockInError::AlreadyClockedIn) => HttpResponse::BadRequest().json(json!({
            "detail": "Employee already clocked in."
        })),
        Err(ClockInError::Database(e)) => {
            error!(error = %e, employee_id = payload.employee_id, "Clock-in failed");
            HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error"
            }))
        }
    }
}

/// Get Open Session
///
/// Reads the employee's clock state without touching it.
#[utoipa::path(
    get,
    path = "/attendance/open/{employee_id}",
    params(("employee_id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Currently-open session", body = Attendance),
        (status = 404, description = "No open session", body = Object, example = json!({
            "detail": "No open clock-in found for this employee."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn open_session(
    engine: web::Data<AttendanceEngine>,
    path: web::Path<i64>,
) -> impl Responder {
    let employee_id = path.into_inner();

    match engine.open_session(employee_id).await {
        Ok(Some(record)) => HttpResponse::Ok().json(record),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "detail": "No open clock-in found for this employee."
        })),
        Err(e) => {
            error!(error = %e, employee_id, "Open-session lookup failed");
            HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error"
            }))
        }
    }
}

/// Clock Out
#[utoipa::path(
    put,
    path = "/attendance/clock-out/{employee_id}",
    params(("employee_id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Session closed", body = Attendance),
        (status = 404, description = "No open session", body = Object, example = json!({
            "detail": "No open clock-in found for this employee."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn clock_out(
    engine: web::Data<AttendanceEngine>,
    path: web::Path<i64>,
) -> impl Responder {
    let employee_id = path.into_inner();

    match engine.clock_out(employee_id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(ClockOutError::NoOpenSession) => HttpResponse::NotFound().json(json!({
            "detail": "No open clock-in found for this employee."
        })),
        Err(ClockOutError::Database(e)) => {
            error!(error = %e, employee_id, "Clock-out failed");
            HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error"
            }))
        }
    }
}
