//! The provisioning flow: connect, create the table, seed it, read it back.
//!
//! Every step runs to completion before the next starts. The first failing
//! step ends the flow with a [`ProvisionError`]; the only failure tolerated
//! along the way is a row that cannot be decoded.

use futures::{Stream, TryStreamExt};
use sqlx::postgres::PgConnection;

use duckpg_db::models::person::Person;
use duckpg_db::repositories::person_repo::USERS_TABLE;
use duckpg_db::repositories::PersonRepo;

use crate::config::ClientConfig;
use crate::error::{ProvisionError, ProvisionResult};
use crate::observer::PersonObserver;

/// Outcome of one read pass over the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSummary {
    /// Rows decoded and handed to the observer.
    pub emitted: usize,
    /// Rows that failed to decode and were skipped.
    pub skipped: usize,
}

/// Run the whole flow against the configured database.
///
/// The connection opened here is closed before returning, whichever step
/// the flow stopped at.
pub async fn run<O>(config: &ClientConfig, observer: &mut O) -> ProvisionResult<ReadSummary>
where
    O: PersonObserver + ?Sized,
{
    let mut conn = duckpg_db::connect(&config.database_uri)
        .await
        .map_err(ProvisionError::Connect)?;
    tracing::info!("Database connection opened");

    let outcome = provision(&mut conn, observer).await;

    duckpg_db::close(conn).await;
    tracing::debug!("Database connection closed");

    outcome
}

/// Create, seed and read back the `users` table on an open connection.
pub async fn provision<O>(
    conn: &mut PgConnection,
    observer: &mut O,
) -> ProvisionResult<ReadSummary>
where
    O: PersonObserver + ?Sized,
{
    PersonRepo::create_table(conn)
        .await
        .map_err(ProvisionError::CreateSchema)?;
    tracing::info!(table = USERS_TABLE, "Table created");

    let inserted = PersonRepo::seed(conn).await.map_err(ProvisionError::Seed)?;
    tracing::info!(table = USERS_TABLE, inserted, "Seed data inserted");

    let summary = consume_rows(PersonRepo::stream_all(conn), Person::decode, observer).await?;
    tracing::info!(
        emitted = summary.emitted,
        skipped = summary.skipped,
        "Read back complete"
    );

    Ok(summary)
}

/// Drain a row stream, decoding each row and handing it to `observer`.
///
/// A row that fails to decode is logged and skipped. An error from the
/// stream itself (the query could not start, or the connection broke while
/// reading) is fatal and ends consumption.
pub async fn consume_rows<S, R, D, O>(
    mut rows: S,
    mut decode: D,
    observer: &mut O,
) -> ProvisionResult<ReadSummary>
where
    S: Stream<Item = Result<R, sqlx::Error>> + Unpin,
    D: FnMut(&R) -> Result<Person, sqlx::Error>,
    O: PersonObserver + ?Sized,
{
    let mut summary = ReadSummary::default();

    while let Some(row) = rows.try_next().await.map_err(ProvisionError::Query)? {
        match decode(&row) {
            Ok(person) => {
                observer.on_person(&person);
                summary.emitted += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cannot decode row, skipping");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
