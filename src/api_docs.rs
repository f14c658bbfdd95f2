use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(api::health::health_check, api::faculty::list_faculty),
    tags(
        (name = "faculty", description = "Faculty directory read API")
    )
)]
pub struct ApiDoc;
