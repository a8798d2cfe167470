//! Telemetry helpers for applications embedding `chart-spec-rs`.
//!
//! The crate only emits `tracing` events (catalog registration, skipped
//! catalog entries, applied editor updates). Hosts either call one of the
//! helpers below or install their own subscriber and filters.

/// Default directive used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "chart_spec=info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_LOG_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_LOG_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive
/// (for example `"chart_spec=debug"` to see every applied editor update).
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
