// stylecheck/src/logger.rs
//! Logger bootstrap for the CLI.

use log::LevelFilter;

/// Initializes the global logger.
///
/// An explicit `level` overrides the environment; with `None`, `RUST_LOG`
/// is honored and the default level is `warn`. Repeated initialization (as
/// happens in tests) is tolerated.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
