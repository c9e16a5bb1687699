use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_millis()
        .parse_default_env();
    builder
}

/// Installs the logger for the `hash_table` binary and tests.
///
/// `level` comes from `--log-level`; a `RUST_LOG` directive replaces it.
pub fn initialize_logger(level: LevelFilter) {
    INIT.call_once_force(|_| {
        // Tests may race to install a logger; losing is fine.
        let _ = builder(level).try_init();
    });
}
