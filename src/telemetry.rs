//! Opt-in tracing bootstrap for applications embedding `ephys-plot`.
//!
//! The crate itself only emits `tracing` events; wiring a subscriber is the
//! host's job. Hosts that do not care can call `init_default_tracing` once
//! at startup and get a compact stderr subscriber.

/// Installs a default `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// The filter honors `RUST_LOG` and falls back to `ephys_plot=info`.
/// Returns `true` on success, `false` when the feature is disabled or a
/// global subscriber was already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ephys_plot=info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
