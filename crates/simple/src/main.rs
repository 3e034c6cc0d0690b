//! `duckpg-simple` -- minimal pgwire client.
//!
//! Connects to a PostgreSQL-protocol server, creates a `users` table, seeds
//! it with ten rows and logs every row read back.
//!
//! # Environment variables
//!
//! | Variable     | Required | Default                                             |
//! |--------------|----------|-----------------------------------------------------|
//! | `DB_URI`     | no       | `postgresql://localhost:15432/main?sslmode=disable` |
//! | `LOG_FORMAT` | no       | `text` (`json` for structured output)               |
//! | `RUST_LOG`   | no       | `duckpg_simple=info,duckpg_db=info`                 |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duckpg_simple::config::{ClientConfig, LogFormat};
use duckpg_simple::observer::LogObserver;

const DEFAULT_LOG_FILTER: &str = "duckpg_simple=info,duckpg_db=info";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ClientConfig::from_env();

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(database = %config.redacted_uri(), "Starting duckpg-simple");

    // --- Provisioning ---
    let mut observer = LogObserver;
    match duckpg_simple::run(&config, &mut observer).await {
        Ok(summary) => {
            tracing::info!(
                emitted = summary.emitted,
                skipped = summary.skipped,
                "Finished"
            );
        }
        Err(e) => {
            tracing::error!(
                stage = e.stage(),
                error = &e as &(dyn std::error::Error + 'static),
                "Provisioning failed"
            );
            std::process::exit(1);
        }
    }
}

fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    );

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
