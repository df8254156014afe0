//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{ErrorBody, FieldError, ScheduleRequest};
use crate::scheduling::ScheduledTransfer;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Transfer Scheduler API",
        version = "1.0.0",
        description = "Schedule bank transfers for a future date and price them by advance notice."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::create_schedule,
        crate::gateway::handlers::list_schedules,
        crate::gateway::handlers::health_check,
    ),
    components(
        schemas(
            ScheduleRequest,
            ScheduledTransfer,
            ErrorBody,
            FieldError,
            HealthResponse,
        )
    ),
    tags(
        (name = "Scheduling", description = "Create and list scheduled transfers"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Transfer Scheduler API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let json_str = ApiDoc::openapi().to_json().unwrap();
        assert!(json_str.contains("Transfer Scheduler API"));
        assert!(json_str.contains("originAccount"));
    }

    #[test]
    fn test_endpoints_registered() {
        let paths = ApiDoc::openapi().paths;
        assert!(paths.paths.contains_key("/api/schedules"));
        assert!(paths.paths.contains_key("/api/health"));
    }

    #[test]
    fn test_schemas_registered() {
        let components = ApiDoc::openapi().components.expect("should have components");
        assert!(components.schemas.contains_key("ScheduledTransfer"));
        assert!(components.schemas.contains_key("ErrorBody"));
    }
}
