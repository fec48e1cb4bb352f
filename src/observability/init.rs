//! Tracing subscriber setup.
//!
//! Called once by the binary before the catalog is loaded, so catalog
//! validation and every handled event end up in the trace file.

use super::{tracer, SERVICE_NAME, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber: an [`EnvFilter`] in front of an
/// OpenTelemetry layer exporting to the trace file in the data directory.
///
/// The filter comes from `RUST_LOG` when set, else `config.trace_level`,
/// else `"info"`.
///
/// # Parameters
///
/// * `config` - Only `trace_level` is read
///
/// # Returns
///
/// - `Some(path)` of the trace file once the subscriber is installed
/// - `None` when the data directory cannot be created or a subscriber is
///   already installed; the shop runs without tracing in both cases
///
/// # Example
///
/// ```no_run
/// use hellowshop::observability::init_tracing;
/// use hellowshop::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// let _trace_file = init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });

    let data_dir = crate::infrastructure::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file.clone(), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .ok()?;

    Some(trace_file)
}
