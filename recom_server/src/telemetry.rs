// Based on https://github.com/LukeMathWalker/tracing-actix-web/blob/main/examples/opentelemetry/src/main.rs#L15
use opentelemetry::global;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::runtime::TokioCurrentThread;
use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::configuration::TelemetrySettings;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Failed to install OpenTelemetry tracer {0}")]
    Tracer(#[from] TraceError),

    #[error("Failed to install `tracing` subscriber {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Composes the subscriber: env filter, optional Jaeger export, bunyan JSON lines to `sink`.
/// Exporting to Jaeger needs a running tokio runtime.
pub fn get_subscriber<Sink>(
    settings: &TelemetrySettings,
    sink: Sink,
) -> Result<impl Subscriber + Send + Sync, TelemetryError>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let tracer = if settings.jaeger_enabled {
        global::set_text_map_propagator(TraceContextPropagator::new());
        #[allow(deprecated)]
        let tracer = opentelemetry_jaeger::new_agent_pipeline()
            .with_service_name(settings.service_name.clone())
            .install_batch(TokioCurrentThread)?;
        Some(tracer)
    } else {
        None
    };

    // Filter based on level - trace, debug, info, warn, error
    // Tunable via `RUST_LOG` env variable
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    let telemetry = tracer.map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));
    let formatting_layer = BunyanFormattingLayer::new(settings.service_name.clone(), sink);

    Ok(Registry::default()
        .with(env_filter)
        .with(telemetry)
        .with(JsonStorageLayer)
        .with(formatting_layer))
}

pub fn init_subscriber(
    subscriber: impl Subscriber + Send + Sync + 'static,
) -> Result<(), TelemetryError> {
    set_global_default(subscriber)?;
    Ok(())
}

/// Installs the global subscriber writing to stdout
pub fn init_telemetry(settings: &TelemetrySettings) -> Result<(), TelemetryError> {
    init_subscriber(get_subscriber(settings, std::io::stdout)?)
}
