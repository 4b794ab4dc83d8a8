use utoipa::OpenApi;

use crate::routes::applications::CreateApplicationRequest;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health_check::health_check,
        crate::routes::applications::list_applications,
        crate::routes::applications::create_application,
        crate::routes::applications::delete_application,
    ),
    components(schemas(CreateApplicationRequest))
)]
pub struct ApiDoc;

