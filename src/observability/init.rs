//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use super::tracer::{self, SERVICE_NAME};
use crate::domain::Result;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `trace_level` is unset or does not parse.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Builds the `EnvFilter` for a configured level, falling back to `info`.
#[must_use]
pub fn env_filter(trace_level: Option<&str>) -> EnvFilter {
    let level = trace_level.unwrap_or(DEFAULT_TRACE_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL))
}

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Spans are filtered by `config.trace_level` and written to
/// `/host/.local/share/zellij/sheetpane/sheetpane-otlp.json`. Calling this
/// more than once is harmless; only the first subscriber is installed.
///
/// # Errors
///
/// Returns [`SheetpaneError::Io`](crate::SheetpaneError::Io) if the data
/// directory cannot be created. The plugin keeps working without traces.
///
/// # Example
///
/// ```rust,no_run
/// use sheetpane::observability::init_tracing;
/// use sheetpane::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// if let Err(e) = init_tracing(&config) {
///     eprintln!("tracing disabled: {e}");
/// }
/// ```
pub fn init_tracing(config: &Config) -> Result<()> {
    std::fs::create_dir_all(paths::get_data_dir())?;

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = tracer::create_tracer_provider(FileWriter::new(paths::trace_file()), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(env_filter(config.trace_level.as_deref()))
        .with(otel_layer)
        .try_init();

    tracing::debug!("tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_accepts_levels() {
        assert_eq!(env_filter(Some("debug")).to_string(), "debug");
        assert_eq!(env_filter(None).to_string(), DEFAULT_TRACE_LEVEL);
    }

    #[test]
    fn env_filter_falls_back_on_garbage() {
        assert_eq!(env_filter(Some("sheetpane=loud")).to_string(), DEFAULT_TRACE_LEVEL);
    }
}
