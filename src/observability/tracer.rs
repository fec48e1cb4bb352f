//! Tracer provider backed by a file span exporter.
//!
//! The shop has no collector to talk to, so spans are exported locally: each
//! batch becomes one OTLP JSON document appended to a size-rotated file in
//! the data directory. Any OTLP-aware tool can replay the file later.

use super::file_writer::{FileWriter, RotationPolicy};
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter writing OTLP JSON lines to a rotating file.
///
/// Each call to [`SpanExporter::export`] produces exactly one line holding
/// `resourceSpans` → `scopeSpans` → `spans` for the whole batch.
struct FileSpanExporter {
    /// Destination file, opened lazily and rotated by size.
    writer: FileWriter,
    /// Turns span data into OTLP JSON.
    formatter: SpanFormatter,
    /// Set once by `shutdown`; later exports are refused.
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    /// Creates an exporter for `file_path`.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Trace file, created on the first export
    /// * `resource` - Resource attributes written into every batch
    /// * `scope` - Instrumentation scope name (the crate name)
    fn new(file_path: PathBuf, resource: Resource, scope: &'static str) -> Self {
        Self {
            writer: FileWriter::new(file_path, RotationPolicy::default()),
            formatter: SpanFormatter::new(resource, scope),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    /// Writes `batch` as a single JSON line.
    ///
    /// # Returns
    ///
    /// - `Ok(())` once the line is written
    /// - `Err(TraceError)` after shutdown or when the file cannot be written
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.formatter.format_batch(&batch).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    /// Refuses further exports. The file handle is closed when the writer
    /// is dropped.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // Resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a provider that exports every span immediately to `file_path`.
///
/// Uses the simple (non-batching) processor: the shop is a single-threaded
/// shell, so a span is written as soon as it closes.
///
/// # Parameters
///
/// * `file_path` - Trace file, see [`TRACE_FILE_NAME`](super::TRACE_FILE_NAME)
/// * `resource` - Service name and version attributes
/// * `scope` - Instrumentation scope name
///
/// # Returns
///
/// A `TracerProvider` ready to hand to `tracing-opentelemetry`.
///
/// # Example
///
/// ```ignore
/// use opentelemetry::KeyValue;
/// use opentelemetry_sdk::resource::Resource;
///
/// let resource = Resource::new(vec![KeyValue::new("service.name", "HellowShop")]);
/// let provider = create_tracer_provider("/tmp/shop-otlp.json".into(), resource, "hellowshop");
/// ```
pub fn create_tracer_provider(
    file_path: PathBuf,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone(), scope);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
