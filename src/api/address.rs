use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::error;

use crate::model::address::{AddressPatch, AddressRead};
use crate::store::Store;

/// Upsert Address
///
/// Creates the employee's address or partially updates the existing one;
/// fields missing from the body keep their stored values.
#[utoipa::path(
    put,
    path = "/employees/{employee_id}/address",
    params(("employee_id" = i64, Path, description = "Owning employee id")),
    request_body = AddressPatch,
    responses(
        (status = 200, description = "Upserted address", body = AddressRead),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "detail": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Address"
)]
pub async fn upsert_address(
    store: web::Data<Store>,
    path: web::Path<i64>,
    payload: web::Json<AddressPatch>,
) -> impl Responder {
    let employee_id = path.into_inner();

    // Boundary check before delegating, so unknown employees 404 instead of
    // tripping the foreign key.
    match store.employees().find(employee_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "detail": "Employee not found"
            }));
        }
        Err(e) => {
            error!(error = %e, employee_id, "Failed to look up employee for address upsert");
            return HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error"
            }));
        }
    }

    match store.addresses().upsert(employee_id, &payload).await {
        Ok(address) => HttpResponse::Ok().json(address),
        Err(e) => {
            error!(error = %e, employee_id, "Failed to upsert address");
            HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error"
            }))
        }
    }
}

/// Delete Address
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}/address",
    params(("employee_id" = i64, Path, description = "Owning employee id")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "No address on file", body = Object, example = json!({
            "detail": "Address not found for this employee"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Address"
)]
pub async fn delete_address(store: web::Data<Store>, path: web::Path<i64>) -> impl Responder {
    let employee_id = path.into_inner();

    match store.addresses().delete(employee_id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "detail": "Address not found for this employee"
        })),
        Err(e) => {
            error!(error = %e, employee_id, "Failed to delete address");
            HttpResponse::InternalServerError().json(json!({
                "detail": "Internal server error"
            }))
        }
    }
}
