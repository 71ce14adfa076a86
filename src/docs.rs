use utoipa::OpenApi;

use crate::api::attendance::ClockInRequest;
use crate::api::employee::{CreateEmployee, EmployeeQuery};
use crate::model::address::{AddressPatch, AddressRead};
use crate::model::attendance::Attendance;
use crate::model::employee::{Employee, EmployeeWithDetails};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Tracker API",
        version = "1.0.0",
        description = r#"
## Employee Attendance Tracker

Records employees, their single optional home address, and their
clock-in/clock-out sessions.

### Key Features
- **Employee Management**
  - Create and list employees with address and attendance history attached
- **Address Management**
  - Upsert (create or partially update) and delete the one-to-one home address
- **Attendance Tracking**
  - Clock in (requires an address on file, one open session per employee)
  - Clock out (closes the open session)

### Response Format
- JSON-based RESTful responses
- Failures carry a `{"detail": "..."}` body with a stable message

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,

        crate::api::address::upsert_address,
        crate::api::address::delete_address,

        crate::api::attendance::clock_in,
        crate::api::attendance::clock_out,
        crate::api::attendance::open_session,
    ),
    components(
        schemas(
            CreateEmployee,
            EmployeeQuery,
            Employee,
            EmployeeWithDetails,
            AddressPatch,
            AddressRead,
            ClockInRequest,
            Attendance,
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Address", description = "Employee home address APIs"),
        (name = "Attendance", description = "Clock-in/clock-out APIs"),
    )
)]
pub struct ApiDoc;
