//! Repository for the `users` table.

use futures::stream::BoxStream;
use sqlx::postgres::{PgConnection, PgRow};

/// Table created and seeded by the provisioning flow.
pub const USERS_TABLE: &str = "users";

/// Literal written into every seeded row.
pub const SEED_NAME: &str = "euiko";

/// Number of rows the seed statement generates.
pub const SEED_ROWS: i64 = 10;

const CREATE_TABLE_SQL: &str = "CREATE TABLE users (name VARCHAR)";

const SELECT_ALL_SQL: &str = "SELECT * FROM users";

/// Statements against the `users` table.
///
/// Every method borrows the caller's connection; nothing here opens or
/// closes connections.
pub struct PersonRepo;

impl PersonRepo {
    /// Create the `users` table.
    ///
    /// Not idempotent: fails when the table already exists.
    pub async fn create_table(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE_SQL).execute(conn).await?;
        Ok(())
    }

    /// Insert [`SEED_ROWS`] copies of [`SEED_NAME`] in one statement.
    ///
    /// The rows come from the server's `generate_series`, so this is a single
    /// round trip regardless of the row count. Returns the affected-row count
    /// reported by the server.
    pub async fn seed(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let query = format!(
            "INSERT INTO {USERS_TABLE} (name) \
             SELECT '{SEED_NAME}' FROM generate_series(1, {SEED_ROWS})"
        );
        let result = sqlx::query(&query).execute(conn).await?;
        Ok(result.rows_affected())
    }

    /// Stream every row of the table.
    ///
    /// The query is sent on first poll. The stream is forward-only; reading
    /// the table again means calling this again.
    pub fn stream_all(conn: &mut PgConnection) -> BoxStream<'_, Result<PgRow, sqlx::Error>> {
        sqlx::query(SELECT_ALL_SQL).fetch(conn)
    }

    /// Count the rows in the table.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {USERS_TABLE}");
        let row: (i64,) = sqlx::query_as(&query).fetch_one(conn).await?;
        Ok(row.0)
    }
}
