//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the CoreRank tracing/logging system.
///
/// Reads `CORERANK_LOG` for per-crate log levels, e.g.
/// `CORERANK_LOG=corerank_graph=debug,corerank_keywords=info`.
///
/// Falls back to `corerank=info` if `CORERANK_LOG` is not set or is invalid.
/// Events go to stderr so that stdout stays free for keyword output.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
