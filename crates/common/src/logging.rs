//! Tracing subscriber setup for the `reel` binary and its crates.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Crates whose events `--verbose` raises to debug.
const REEL_TARGETS: [&str; 5] = [
    "reel",
    "reel_common",
    "reel_project_model",
    "reel_motion_core",
    "reel_render_engine",
];

/// Filter directive for `config`, optionally raising Reel crates to debug.
///
/// Third-party crates keep the configured level either way.
pub fn filter_directive(config: &LoggingConfig, verbose: bool) -> String {
    if !verbose {
        return config.level.clone();
    }
    let mut directive = config.level.clone();
    for target in REEL_TARGETS {
        directive.push_str(&format!(",{target}=debug"));
    }
    directive
}

/// Install the global subscriber. Events go to stderr so stdout stays
/// clean for JSON frame output.
///
/// `RUST_LOG` replaces the configured directive when set.
pub fn init_logging(config: &LoggingConfig, verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbose)));

    let json_layer = config
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(verbose)
    });

    // A second init (tests, embedding) keeps the first subscriber.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_directive_is_configured_level() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            json: false,
        };
        assert_eq!(filter_directive(&config, false), "warn");
    }

    #[test]
    fn test_verbose_raises_reel_crates_only() {
        let directive = filter_directive(&LoggingConfig::default(), true);
        assert!(directive.starts_with("info,"));
        assert!(directive.contains("reel_render_engine=debug"));
        assert!(directive.contains(",reel=debug"));
        assert!(EnvFilter::try_new(&directive).is_ok());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(&LoggingConfig::default(), false);
        init_logging(&LoggingConfig::default(), true);
        tracing::debug!("still logging");
    }
}
