//! Storage layer for the simple pgwire client.
//!
//! The client holds exactly one connection for its whole run, so this crate
//! hands out a bare [`PgConnection`] rather than a pool.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgConnection;
use sqlx::Connection;

/// Open a single connection from a database URL.
///
/// The URL is passed to the driver untouched; a malformed or unreachable
/// target surfaces as the driver's error.
pub async fn connect(database_url: &str) -> Result<PgConnection, sqlx::Error> {
    PgConnection::connect(database_url).await
}

/// Close a connection, sending the protocol terminate message.
///
/// A failed shutdown handshake is logged and swallowed: the socket is
/// released either way and the caller's outcome is already decided.
pub async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection cleanly");
    }
}
