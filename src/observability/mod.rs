//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `~/.local/share/zellij/sheetpane/sheetpane-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//!
//! # Configuration
//!
//! Trace level comes from the `trace_level` plugin option and defaults to
//! `"info"`. Any `EnvFilter` directive is accepted, e.g.
//! `sheetpane::sheet=trace` to see per-frame spring samples.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;
pub mod span_formatter;
pub mod tracer;

pub use init::init_tracing;
