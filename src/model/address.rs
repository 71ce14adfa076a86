use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Home address as it travels over the wire. The owning employee is implied
/// by the route, so `employee_id` never appears in request or response
/// bodies.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "street": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "zip_code": "62701"
    })
)]
pub struct AddressRead {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Upsert payload. Absent fields are left unchanged when an address already
/// exists for the employee.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddressPatch {
    #[schema(example = "1 Main St", nullable = true)]
    pub street: Option<String>,

    #[schema(example = "Springfield", nullable = true)]
    pub city: Option<String>,

    #[schema(example = "IL", nullable = true)]
    pub state: Option<String>,

    #[schema(example = "62701", nullable = true)]
    pub zip_code: Option<String>,
}
