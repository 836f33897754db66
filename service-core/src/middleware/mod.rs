pub mod cors;
pub mod metrics;
pub mod security_headers;
pub mod tracing;

pub use self::cors::{origin_guard_middleware, OriginAllowList, CORS_BLOCKED_MESSAGE};
pub use self::metrics::metrics_middleware;
pub use self::security_headers::security_headers_middleware;
pub use self::tracing::{request_id_middleware, REQUEST_ID_HEADER};
