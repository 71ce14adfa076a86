use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::address::AddressRead;
use crate::model::attendance::Attendance;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Ada Lovelace",
        "email": "ada@example.com"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Employee with its address and attendance history attached, the shape the
/// list and get-by-id endpoints return.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeWithDetails {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    pub attendances: Vec<Attendance>,

    #[schema(nullable = true)]
    pub address: Option<AddressRead>,
}
