//! API configuration constants

/// Maximum input text length (bytes).
///
/// Allows texts up to 1MB. Guards against resource exhaustion from
/// oversized analysis requests.
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// Default bind address.
///
/// Standard localhost port for development use; the same port the service
/// has always answered on.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Kiwi Morpheme Analyzer";
