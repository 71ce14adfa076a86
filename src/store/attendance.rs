use sqlx::SqlitePool;

use crate::model::attendance::Attendance;

/// Read-side repository for the `attendances` table. The mutating paths
/// (insert on clock-in, close on clock-out) live in the engine, which owns
/// the transaction they run under.
#[derive(Clone)]
pub struct AttendanceRepo {
    pool: SqlitePool,
}

impl AttendanceRepo {
    pub(super) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The employee's currently-open session, if any. The partial unique
    /// index guarantees there is at most one.
    pub async fn open_session(&self, employee_id: i64) -> Result<Option<Attendance>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, employee_id, clock_in, clock_out FROM attendances \
             WHERE employee_id = ? AND clock_out IS NULL",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_for(&self, employee_id: i64) -> Result<Vec<Attendance>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, employee_id, clock_in, clock_out FROM attendances \
             WHERE employee_id = ? ORDER BY id",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::db::test_pool;
    use crate::store::Store;

    #[actix_web::test]
    async fn open_index_rejects_a_second_open_row() {
        let pool = test_pool().await;
        let store = Store::new(pool.clone());
        let id = store
            .employees()
            .create("Ada", "ada@x.com")
            .await
            .unwrap()
            .id;

        let insert_open = "INSERT INTO attendances (employee_id, clock_in, clock_out) \
                           VALUES (?, ?, NULL)";
        sqlx::query(insert_open)
            .bind(id)
            .bind(Utc::now())
            .execute(&pool)
            .await
            .unwrap();

        // Straight to the table, bypassing the engine's pre-check.
        let err = sqlx::query(insert_open)
            .bind(id)
            .bind(Utc::now())
            .execute(&pool)
            .await
            .unwrap_err();

        match err {
            sqlx::Error::Database(db_err) => assert_eq!(db_err.code().as_deref(), Some("2067")),
            other => panic!("expected unique violation, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn closed_rows_do_not_count_as_open() {
        let pool = test_pool().await;
        let store = Store::new(pool.clone());
        let id = store
            .employees()
            .create("Ada", "ada@x.com")
            .await
            .unwrap()
            .id;

        let now = Utc::now();
        sqlx::query("INSERT INTO attendances (employee_id, clock_in, clock_out) VALUES (?, ?, ?)")
            .bind(id)
            .bind(now)
            .bind(now)
            .execute(&pool)
            .await
            .unwrap();

        let repo = store.attendance();
        assert!(repo.open_session(id).await.unwrap().is_none());
        assert_eq!(repo.list_for(id).await.unwrap().len(), 1);
    }
}
