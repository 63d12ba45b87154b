use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr so stdout carries only command output.
pub fn init(level: &str, verbose: bool) {
    let directive = filter_directive(level, verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// `verbose` forces debug output; otherwise `RUST_LOG` wins over the
/// configured level.
fn filter_directive(level: &str, verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }

    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| level.to_string())
}
