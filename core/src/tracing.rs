//! Tracing utilities for query compilation and decoding.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. The `cfg` is evaluated in the calling crate, which must
//! expose its own `tracing` feature and dependency.

/// Emit a debug-level tracing event with the SQL text, parameter count and operation.
///
/// ```ignore
/// sqlshape_trace_query!(&sql, params.len(), "select");
/// ```
#[macro_export]
macro_rules! sqlshape_trace_query {
    ($sql:expr, $param_count:expr, $operation:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sql = %$sql,
            params = $param_count,
            operation = $operation,
            "sqlshape.query"
        );
    };
}

/// Emit a trace-level event naming the shape chosen for a decoded node.
///
/// ```ignore
/// sqlshape_trace_decode!("RangeOp", path);
/// ```
#[macro_export]
macro_rules! sqlshape_trace_decode {
    ($shape:expr, $path:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(shape = $shape, path = %$path, "sqlshape.decode");
    };
}

/// Emit a debug-level event when a node contributes nothing to the output.
///
/// ```ignore
/// sqlshape_trace_skip!("empty where group");
/// ```
#[macro_export]
macro_rules! sqlshape_trace_skip {
    ($reason:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(reason = $reason, "sqlshape.skip");
    };
}

/// Emit a warn-level event for input that is accepted but partly ignored.
///
/// ```ignore
/// sqlshape_warn!(table = %name, "ON conditions ignored for CROSS JOIN");
/// ```
#[macro_export]
macro_rules! sqlshape_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)+);
    };
}
