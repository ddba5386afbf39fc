//! Thin wrappers over the `log` facade.
//!
//! With the `logging` feature disabled the macros still type-check their
//! arguments but emit nothing.

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)+) => {
        log::trace!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        log::debug!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[cfg(feature = "logging")]
macro_rules! log_info {
    ($($arg:tt)+) => {
        log::info!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_info {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}
