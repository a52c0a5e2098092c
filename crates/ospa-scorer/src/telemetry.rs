use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global subscriber on stderr so command output on stdout stays clean.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(&config.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// `RUST_LOG` wins over the configured level. Connection chatter from the sync
/// client is capped at `warn` otherwise.
pub fn build_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directives = format!("{log_level},{QUIET_DEPENDENCIES}");
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::EnvFilter {
        value: log_level.to_string(),
        source,
    })
}

const QUIET_DEPENDENCIES: &str = "hyper_util=warn,reqwest=warn";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_keeps_dependencies_quiet() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter("debug").expect("filter builds");
        let rendered = filter.to_string();
        assert!(rendered.contains("debug"));
        assert!(rendered.contains("reqwest=warn"));
    }

    #[test]
    fn rejects_unparseable_filter() {
        std::env::remove_var("RUST_LOG");
        let config = TelemetryConfig {
            log_level: "ospa=loud".to_string(),
        };
        match init(&config) {
            Err(err @ TelemetryError::EnvFilter { .. }) => {
                assert_eq!(
                    err.to_string(),
                    "invalid log level/filter 'ospa=loud': unable to build EnvFilter"
                );
                assert!(std::error::Error::source(&err).is_some());
            }
            other => panic!("expected filter error, got {other:?}"),
        }
    }
}
