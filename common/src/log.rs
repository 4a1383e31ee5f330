//! Logging macros shared by every crate in the workspace.
//!
//! They only emit `tracing` events; the binary decides how those are
//! rendered. `success!` is an `INFO` event under its own target so the
//! formatter can give it a distinct marker.

pub const SUCCESS_TARGET: &str = "morse::success";
pub const PRINT_TARGET: &str = "morse::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
