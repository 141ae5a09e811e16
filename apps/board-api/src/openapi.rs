//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Board API",
        version = "0.1.0",
        description = "MongoDB-based REST API for a task board with sections and ordered tasks",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_board::ApiDoc)
    ),
    tags(
        (name = "Sections", description = "Board section endpoints"),
        (name = "Tasks", description = "Task endpoints"),
        (name = "Board", description = "Whole-board maintenance endpoints")
    )
)]
pub struct ApiDoc;
