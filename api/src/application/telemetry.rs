use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Installs the global tracing subscriber. Call once, before anything logs.
pub fn init_tracing(log: &LogArgs) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_new(&log.filter)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
