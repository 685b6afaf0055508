use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or unusable.
pub const DEFAULT_LOG_DIRECTIVE: &str = "kakaku_watcher=info";

/// Log filter for the binary. A usable `RUST_LOG` value replaces the
/// default entirely, including the level of this crate's own target.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}
