use log::Level;

/// Component-tagged logging to the browser console
pub struct Logger;

impl Logger {
    /// Install the console logger and panic hook. Safe to call more than once.
    pub fn init() {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        };
        // A second init fails because a logger is already set; that is fine.
        let _ = console_log::init_with_level(level);
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        log::log!(target: component, level, "[{}] {}", component, message);
    }
}
