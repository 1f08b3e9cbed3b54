mod config;
mod shutdown;

pub use config::TelemetryConfig;
pub use shutdown::TelemetryGuard;

use crate::error::{Make2OasError, Result};
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{WithExportConfig, WithHttpConfig};
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global tracing subscriber.
///
/// Logs go to stderr so generated documents can be piped from stdout. With
/// `OTEL_ENABLED=true` spans are also exported over OTLP/HTTP; if the
/// exporter cannot be built, logging falls back to stderr only.
pub fn init_telemetry() -> TelemetryGuard {
    let config = TelemetryConfig::from_env();

    if config.enabled {
        match init_with_otel(&config) {
            Ok(provider) => return TelemetryGuard::new(Some(provider)),
            Err(e) => eprintln!(
                "Failed to initialize OpenTelemetry: {}. Falling back to stderr-only logging.",
                e
            ),
        }
    }

    init_stderr_only(&config);
    TelemetryGuard::stdout_only()
}

fn env_filter(config: &TelemetryConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.default_filter))
}

fn init_with_otel(config: &TelemetryConfig) -> Result<SdkTracerProvider> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()?;

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_http_client(client)
        .with_endpoint(&config.endpoint)
        .with_protocol(opentelemetry_otlp::Protocol::HttpBinary)
        .with_timeout(std::time::Duration::from_secs(5))
        .with_headers(config.headers.clone())
        .build()
        .map_err(|e| {
            Make2OasError::ValidationError(format!("Failed to build OTLP exporter: {}", e))
        })?;

    let resource = opentelemetry_sdk::Resource::builder_empty()
        .with_service_name(config.service_name.clone())
        .with_attributes([KeyValue::new("service.version", env!("CARGO_PKG_VERSION"))])
        .build();

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    let tracer = provider.tracer("make2oas");
    opentelemetry::global::set_tracer_provider(provider.clone());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .with(otel_layer)
        .init();

    tracing::info!("OpenTelemetry initialized with endpoint: {}", config.endpoint);
    Ok(provider)
}

fn init_stderr_only(config: &TelemetryConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();

    tracing::debug!("Tracing initialized (stderr only, OpenTelemetry disabled)");
}
