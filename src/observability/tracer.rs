//! OpenTelemetry tracer provider with file-based span export.
//!
//! A `SpanExporter` that appends each exported batch as one OTLP JSON line
//! to a rotating file. Zellij plugins have no network access, so this is the
//! only sink.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope and service name of every exported span.
pub const SERVICE_NAME: &str = "sheetpane";

/// File-based OpenTelemetry span exporter.
#[derive(Debug)]
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(writer: FileWriter, resource: Resource) -> Self {
        Self {
            writer,
            formatter: SpanFormatter::new(resource, SERVICE_NAME),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn export_now(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }
        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.export_now(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        self.formatter = SpanFormatter::new(res.clone(), SERVICE_NAME);
    }
}

/// Creates a tracer provider that exports every span immediately to `writer`.
pub fn create_tracer_provider(writer: FileWriter, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(writer, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trace.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
        let provider = create_tracer_provider(FileWriter::new(path.clone()), resource);

        provider.tracer(SERVICE_NAME).in_span("sheet_open", |_cx| {});
        let _ = provider.force_flush();

        let content = std::fs::read_to_string(&path).expect("trace file");
        let line = content.lines().next().expect("one batch");
        let doc: serde_json::Value = serde_json::from_str(line).expect("json");
        let span = &doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "sheet_open");
    }

    #[test]
    fn shut_down_exporter_refuses_batches() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut exporter = FileSpanExporter::new(
            FileWriter::new(dir.path().join("trace.json")),
            Resource::empty(),
        );
        exporter.shutdown();
        assert!(exporter.export_now(&[]).is_err());
    }
}
