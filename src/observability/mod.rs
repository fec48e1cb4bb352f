//! OpenTelemetry tracing with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans from event handling, view model computation and catalog loading are
//! written as OTLP JSON to `$XDG_DATA_HOME/hellowshop/hellowshop-otlp.json`
//! (see [`get_data_dir`](crate::infrastructure::get_data_dir)). The file
//! rotates at 10 MB keeping three backups.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// `service.name` resource attribute and instrumentation scope name.
pub const SERVICE_NAME: &str = "HellowShop";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "hellowshop-otlp.json";
