//! Process-wide tracing setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` (via [`Config::log_level`]); an invalid
/// directive falls back to `info`. `LOG_FORMAT=json` switches to one JSON
/// object per line.
///
/// Call once, before anything logs.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
