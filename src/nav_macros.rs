//! Internal macros.

/// Emit a `tracing::trace!` event when the `tracing` feature is enabled,
/// compile to nothing otherwise.
macro_rules! nav_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use nav_trace;
