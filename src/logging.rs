// Logger setup plus conditional logging macros - the macros are only active in debug builds

use std::io::Write;

/// Install `env_logger` as the `log` backend.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Records go to
/// stderr with a local timestamp, so a line-oriented game on stdout stays clean.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    // A second init (tests, embedding) keeps the first logger
    if let Err(e) = result {
        log::debug!("logger already installed: {e}");
    }
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
