use chrono::Local;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Default filter when RUST_LOG is not set
const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Local wall-clock timestamps in the compact log format
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Pick the filter directive: RUST_LOG wins, then the verbose flag
pub fn filter_directive(env_value: Option<&str>, verbose: bool) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ if verbose => VERBOSE_FILTER.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize tracing to stderr so stdout stays clean for exported data
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    tracing::debug!(target: "system", "Tracing initialized with filter '{}'", directive);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_precedence() {
        assert_eq!(filter_directive(None, false), "warn");
        assert_eq!(filter_directive(None, true), "debug");
        assert_eq!(filter_directive(Some("chart=trace"), true), "chart=trace");
        assert_eq!(filter_directive(Some("  "), false), "warn");
    }
}
