//! Stable error codes for programmatic handling across the API surface.

/// Every tcgen error maps to a stable SCREAMING_SNAKE code that callers
/// can match on without parsing display strings.
pub trait TcgenErrorCode {
    fn error_code(&self) -> &'static str;
}
