use sqlx::SqlitePool;

use crate::model::address::{AddressPatch, AddressRead};

/// Repository for the `addresses` table. The table's primary key IS the
/// employee reference, so one-to-one is a schema fact rather than a
/// convention this code has to police.
#[derive(Clone)]
pub struct AddressRepo {
    pool: SqlitePool,
}

impl AddressRepo {
    pub(super) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, employee_id: i64) -> Result<Option<AddressRead>, sqlx::Error> {
        sqlx::query_as("SELECT street, city, state, zip_code FROM addresses WHERE employee_id = ?")
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Create-or-partially-update in one statement. On conflict, absent
    /// patch fields keep the stored value; on first insert they default to
    /// empty strings.
    pub async fn upsert(
        &self,
        employee_id: i64,
        patch: &AddressPatch,
    ) -> Result<AddressRead, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO addresses (employee_id, street, city, state, zip_code) \
             VALUES (?1, COALESCE(?2, ''), COALESCE(?3, ''), COALESCE(?4, ''), COALESCE(?5, '')) \
             ON CONFLICT(employee_id) DO UPDATE SET \
                 street   = COALESCE(?2, street), \
                 city     = COALESCE(?3, city), \
                 state    = COALESCE(?4, state), \
                 zip_code = COALESCE(?5, zip_code) \
             RETURNING street, city, state, zip_code",
        )
        .bind(employee_id)
        .bind(patch.street.as_deref())
        .bind(patch.city.as_deref())
        .bind(patch.state.as_deref())
        .bind(patch.zip_code.as_deref())
        .fetch_one(&self.pool)
        .await
    }

    /// Returns whether a row was actually removed. Deleting an absent
    /// address is not an error at this layer.
    pub async fn delete(&self, employee_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM addresses WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
