use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One clock-in/clock-out pair. `clock_out == None` means the employee is
/// currently clocked in (an "open session").
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    #[schema(example = 10)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(value_type = String, format = "date-time")]
    pub clock_in: DateTime<Utc>,

    #[schema(value_type = Option<String>, format = "date-time", nullable = true)]
    pub clock_out: Option<DateTime<Utc>>,
}
