pub mod address;
pub mod attendance;
pub mod employee;

use sqlx::SqlitePool;

pub use address::AddressRepo;
pub use attendance::AttendanceRepo;
pub use employee::{CreateEmployeeError, EmployeeRepo};

/// Top-level handle over the entity store. Handlers pull the repository they
/// need off this instead of holding raw pools.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn employees(&self) -> EmployeeRepo {
        EmployeeRepo::new(self.pool.clone())
    }

    pub fn addresses(&self) -> AddressRepo {
        AddressRepo::new(self.pool.clone())
    }

    pub fn attendance(&self) -> AttendanceRepo {
        AttendanceRepo::new(self.pool.clone())
    }
}
