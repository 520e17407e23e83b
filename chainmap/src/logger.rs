use std::sync::Once;

use log::LevelFilter;

static LOGGER: Once = Once::new();

/// Routes this crate's `log` output through `env_logger`.
///
/// Everything logs at `Info` unless `RUST_LOG` says otherwise; table
/// internals (`trace!` per insertion, `debug!` per lookup) stay quiet by
/// default. Later calls are no-ops, and a logger installed by the host
/// program is left in place.
pub fn initialize_logger() {
    LOGGER.call_once_force(|_| {
        let _ = env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .filter_module(crate_root(), LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env()
            .try_init();
    });
}

/// `chainmap` from `chainmap::logger`.
fn crate_root() -> &'static str {
    let path = module_path!();
    path.split("::").next().unwrap_or(path)
}
