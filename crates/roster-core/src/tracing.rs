use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the process-wide JSON subscriber. Call once at service startup.
///
/// `RUST_LOG` wins when set and parsable; otherwise `default_directive`
/// (e.g. `"info"` or `"roster_staff=debug,info"`) applies. Event fields are
/// flattened into the top-level JSON object. Later calls are ignored.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .try_init();
}
