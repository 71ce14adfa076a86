use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::model::employee::{Employee, EmployeeWithDetails};
use crate::store::{CreateEmployeeError, Store};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com", format = "email")]
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EmployeeQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Email already in use", body = Object, example = json!({
            "detail": "Email already registered"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<Store>,
    payload: web::Json<CreateEmployee>,
) -> impl Responder {
    match store.employees().create(&payload.name, &payload.email).await {
        Ok(employee) => HttpResponse::Created().json(employee),
        Err(CreateEmployeeError::EmailTaken) => HttpResponse::BadRequest().json(json!({
            "detail": "Email already registered"
        })),
        Err(CreateEmployeeError::Database(e)) => {
            error!(error = %e, "Failed to create employee");
            HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error"
            }))
        }
    }
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Page size, at most 100")
    ),
    responses(
        (status = 200, description = "Employees with address and attendance history", body = [EmployeeWithDetails]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<Store>,
    query: web::Query<EmployeeQuery>,
) -> impl Responder {
    let skip = query.skip.unwrap_or(0).max(0);
    let limit = query.limit.unwrap_or(100).clamp(1, 100);

    match store.employees().list_with_details(skip, limit).await {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(e) => {
            error!(error = %e, "Failed to list employees");
            HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error"
            }))
        }
    }
}

/// Get Employee
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee with details", body = EmployeeWithDetails),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "detail": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(store: web::Data<Store>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match store.employees().find_with_details(id).await {
        Ok(Some(employee)) => HttpResponse::Ok().json(employee),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "detail": "Employee not found"
        })),
        Err(e) => {
            error!(error = %e, id, "Failed to fetch employee");
            HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error"
            }))
        }
    }
}
