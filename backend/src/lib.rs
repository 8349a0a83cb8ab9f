//! CRM backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware re-exported for application wiring.
pub use middleware::Trace;
/// Request-scoped trace identifier.
pub use domain::TraceId;
