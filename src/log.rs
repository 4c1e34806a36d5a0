#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Initialize logging for the CLI or the browser build.
///
/// # Behavior
/// - **Native (CLI):** `Debug` level if `debug_enabled`, otherwise `Info`;
///   `RUST_LOG` wins when set.
/// - **WASM:** logs to the browser console at `Debug` or `Info` level.
///
/// Library code only emits through the `log` facade; calling this is up to the front end.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        match console_log::init_with_level(level) {
            Ok(()) => {
                log::info!("WASM logger initialized at {level:?} level");
            }
            Err(e) => {
                // no logger yet, so report straight to the console
                let msg = format!(
                    "Failed to initialize console_log: {e}. Logging will be unavailable."
                );
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        // a second init (e.g. from tests) keeps the first logger
        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}
