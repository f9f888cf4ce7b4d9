use tracing_subscriber::EnvFilter;

/// Sets up the tracing subscriber for a download binary.
///
/// Logs go to stderr so stdout stays reserved for the command's status lines
/// ("Downloading …" / "Saving …"), which scripts may parse. Verbosity follows
/// `RUST_LOG`, defaulting to info for this crate.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("nbastats=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
