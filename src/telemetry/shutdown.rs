use opentelemetry_sdk::trace::SdkTracerProvider;

/// Flushes pending spans when dropped
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    pub fn new(provider: Option<SdkTracerProvider>) -> Self {
        Self { provider }
    }

    /// Guard for stdout-only logging; nothing to flush
    pub fn stdout_only() -> Self {
        Self::new(None)
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            tracing::debug!("Shutting down telemetry...");
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to flush telemetry: {}", e);
            }
        }
    }
}
