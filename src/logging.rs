// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor a verbosity flag is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Picks the filter directive: `RUST_LOG` wins, then `--verbose`/`--quiet`.
pub fn filter_directive(env: Option<&str>, verbose: bool, quiet: bool) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => "debug".to_string(),
        _ if quiet => "error".to_string(),
        _ => DEFAULT_LOG_LEVEL.to_string(),
    }
}

/// Installs the stderr subscriber. Stdout is reserved for results.
pub fn init(verbose: bool, quiet: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(env.as_deref(), verbose, quiet);
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
