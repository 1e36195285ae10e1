//! Console logging for the browser build.
//!
//! All modules log through the `log` facade; in the browser the records go to
//! the devtools console via `console_log`, and panics are reported there too.

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init(level: log::Level) {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(level) {
            log::debug!("console logger already installed: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("console logging unavailable outside the browser (level {level})");
    }
}
