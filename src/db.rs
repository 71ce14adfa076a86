use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

/// Schema applied at startup. The partial unique index on open attendances
/// is what makes "at most one open session per employee" hold under
/// concurrent clock-ins, not just under the engine's pre-check.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS employees (
        id    INTEGER PRIMARY KEY AUTOINCREMENT,
        name  TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS addresses (
        employee_id INTEGER PRIMARY KEY
                    REFERENCES employees(id) ON DELETE CASCADE,
        street      TEXT NOT NULL,
        city        TEXT NOT NULL,
        state       TEXT NOT NULL,
        zip_code    TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS attendances (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL REFERENCES employees(id),
        clock_in    TEXT NOT NULL,
        clock_out   TEXT
    )",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_attendances_open
        ON attendances (employee_id) WHERE clock_out IS NULL",
];

pub async fn init_db(database_url: &str) -> SqlitePool {
    let options = SqliteConnectOptions::from_str(database_url)
        .expect("DATABASE_URL is not a valid sqlite URL")
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    create_schema(&pool)
        .await
        .expect("Failed to create database schema");

    pool
}

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Fresh in-memory database with the schema applied. One connection so the
/// database lives as long as the pool.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    create_schema(&pool).await.unwrap();
    pool
}
