use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::model::attendance::Attendance;
use crate::store::Store;

/// Clock-in/clock-out state machine. Per employee there are exactly two
/// states, not-clocked-in and clocked-in, and the guards below are the only
/// transitions between them.
#[derive(Clone)]
pub struct AttendanceEngine {
    pool: SqlitePool,
    store: Store,
}

#[derive(Debug, Error)]
pub enum ClockInError {
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("employee has no address on file")]
    AddressRequired,
    #[error("employee already clocked in")]
    AlreadyClockedIn,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum ClockOutError {
    /// Unknown employee and "exists but not clocked in" are deliberately
    /// indistinguishable at this layer.
    #[error("no open clock-in for this employee")]
    NoOpenSession,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AttendanceEngine {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            store: Store::new(pool.clone()),
            pool,
        }
    }

    /// Opens a new session for the employee. Checks run in a fixed order
    /// callers can rely on: employee exists, employee has an address, no
    /// session is already open. The whole read-check-write sequence runs in
    /// one transaction, and the partial unique index backstops the
    /// open-session check against racing clock-ins.
    pub async fn clock_in(&self, employee_id: i64) -> Result<Attendance, ClockInError> {
        let mut tx = self.pool.begin().await?;

        let employee: Option<(i64,)> = sqlx::query_as("SELECT id FROM employees WHERE id = ?")
            .bind(employee_id)
            .fetch_optional(&mut *tx)
            .await?;
        if employee.is_none() {
            return Err(ClockInError::EmployeeNotFound);
        }

        let address: Option<(i64,)> =
            sqlx::query_as("SELECT employee_id FROM addresses WHERE employee_id = ?")
                .bind(employee_id)
                .fetch_optional(&mut *tx)
                .await?;
        if address.is_none() {
            return Err(ClockInError::AddressRequired);
        }

        let open: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM attendances WHERE employee_id = ? AND clock_out IS NULL",
        )
        .bind(employee_id)
        .fetch_optional(&mut *tx)
        .await?;
        if open.is_some() {
            return Err(ClockInError::AlreadyClockedIn);
        }

        let inserted = sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendances (employee_id, clock_in, clock_out) VALUES (?, ?, NULL) \
             RETURNING id, employee_id, clock_in, clock_out",
        )
        .bind(employee_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await;

        let record = match inserted {
            Ok(record) => record,
            // Lost the race on the open-session index; same outcome the
            // pre-check would have reported.
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("2067") => {
                return Err(ClockInError::AlreadyClockedIn);
            }
            Err(err) => return Err(err.into()),
        };

        tx.commit().await?;
        Ok(record)
    }

    /// Closes the employee's open session, stamping `clock_out` with the
    /// server clock. One statement: the WHERE clause is the guard, and a
    /// missing row means there was nothing to close.
    pub async fn clock_out(&self, employee_id: i64) -> Result<Attendance, ClockOutError> {
        let updated: Option<Attendance> = sqlx::query_as(
            "UPDATE attendances SET clock_out = ?2 \
             WHERE employee_id = ?1 AND clock_out IS NULL \
             RETURNING id, employee_id, clock_in, clock_out",
        )
        .bind(employee_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(ClockOutError::NoOpenSession)
    }

    /// Read-only view of the employee's clock state.
    pub async fn open_session(&self, employee_id: i64) -> Result<Option<Attendance>, sqlx::Error> {
        self.store.attendance().open_session(employee_id).await
    }
}
