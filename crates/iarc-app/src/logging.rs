//! Log subscriber setup for the runner.
//!
//! Library crates only emit through `tracing`; the subscriber lives here.
//! `RUST_LOG` wins over the CLI level when set.

use tracing_subscriber::EnvFilter;

use crate::error::RunError;

/// Build the filter: `RUST_LOG` if present and valid, else `level`, else `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a compact `fmt` subscriber writing to stderr.
pub fn init_logging(level: &str) -> Result<(), RunError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| RunError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_level_falls_back() {
        // Must not panic on garbage input.
        let filter = env_filter("not a [level");
        assert!(!filter.to_string().is_empty());
    }
}
