use sqlx::SqlitePool;
use thiserror::Error;

use crate::model::employee::{Employee, EmployeeWithDetails};
use crate::store::address::AddressRepo;
use crate::store::attendance::AttendanceRepo;

/// Repository for the `employees` table.
#[derive(Clone)]
pub struct EmployeeRepo {
    pool: SqlitePool,
}

#[derive(Debug, Error)]
pub enum CreateEmployeeError {
    #[error("email already registered")]
    EmailTaken,
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl EmployeeRepo {
    pub(super) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new employee. Email uniqueness is enforced by the UNIQUE
    /// constraint; a violation surfaces as `EmailTaken` without a prior
    /// lookup round trip.
    pub async fn create(&self, name: &str, email: &str) -> Result<Employee, CreateEmployeeError> {
        let result = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, email) VALUES (?, ?) RETURNING id, name, email",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(employee) => Ok(employee),
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("2067") => {
                Err(CreateEmployeeError::EmailTaken)
            }
            Err(err) => Err(CreateEmployeeError::Database(err)),
        }
    }

    pub async fn find(&self, id: i64) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as("SELECT id, name, email FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_with_details(
        &self,
        id: i64,
    ) -> Result<Option<EmployeeWithDetails>, sqlx::Error> {
        let Some(employee) = self.find(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.attach_details(employee).await?))
    }

    /// Eager-loaded page of employees, ordered by id.
    pub async fn list_with_details(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<EmployeeWithDetails>, sqlx::Error> {
        let employees: Vec<Employee> =
            sqlx::query_as("SELECT id, name, email FROM employees ORDER BY id LIMIT ? OFFSET ?")
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await?;

        let mut details = Vec::with_capacity(employees.len());
        for employee in employees {
            details.push(self.attach_details(employee).await?);
        }
        Ok(details)
    }

    async fn attach_details(&self, employee: Employee) -> Result<EmployeeWithDetails, sqlx::Error> {
        let attendances = AttendanceRepo::new(self.pool.clone())
            .list_for(employee.id)
            .await?;
        let address = AddressRepo::new(self.pool.clone())
            .find(employee.id)
            .await?;

        Ok(EmployeeWithDetails {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            attendances,
            address,
        })
    }
}
