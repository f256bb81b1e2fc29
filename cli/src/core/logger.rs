use std::sync::OnceLock;
use std::time::Instant;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    debug: bool,
    started: Instant,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger {
            debug,
            started: Instant::now(),
        });
    }

    /// Messages logged before `init` are dropped.
    fn enabled() -> Option<&'static Logger> {
        LOGGER.get().filter(|logger| logger.debug)
    }

    pub fn debug(message: &str) {
        Self::debug_fmt(format_args!("{message}"));
    }

    pub fn debug_fmt(args: std::fmt::Arguments) {
        if let Some(logger) = Self::enabled() {
            let elapsed = logger.started.elapsed();
            eprintln!("[debug {:>8.3}ms] {args}", elapsed.as_secs_f64() * 1000.0);
        }
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::core::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}
