/// Fatal failures of the provisioning flow.
///
/// There is one variant per step, each carrying the driver error as its
/// source. The message names the step only; the driver error is reached
/// through [`std::error::Error::source`]. All of them end the process the
/// same way; [`ProvisionError::stage`] exists only to tag log output.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// The connection could not be opened.
    #[error("Failed to open database connection")]
    Connect(#[source] sqlx::Error),

    /// The `users` table could not be created (it may already exist).
    #[error("Failed to create table")]
    CreateSchema(#[source] sqlx::Error),

    /// The seed insert failed.
    #[error("Failed to insert data")]
    Seed(#[source] sqlx::Error),

    /// The read-back query failed to start or broke off mid-stream.
    #[error("Failed to query rows")]
    Query(#[source] sqlx::Error),
}

/// Convenience alias for flow return values.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

impl ProvisionError {
    /// Short name of the step that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            ProvisionError::Connect(_) => "connect",
            ProvisionError::CreateSchema(_) => "create_schema",
            ProvisionError::Seed(_) => "seed",
            ProvisionError::Query(_) => "query",
        }
    }
}
