use actix_web::{
    HttpResponse, Responder, ResponseError, delete, get,
    http::{StatusCode, header::ContentType},
    post,
    web::{Bytes, Data, Json, Path},
};
use kube::ResourceExt;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::info;
use tracing_actix_web::RootSpan;
use utoipa::ToSchema;

use crate::k8s::application::Application;
use crate::k8s::{K8sClient, K8sError};

/// Maximum number of applications returned by the list endpoint.
pub const LIST_LIMIT: u32 = 10;

/// The first required field found empty in a [`CreateApplicationRequest`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("application name is missing")]
    ApplicationNameMissing,

    #[error("repository url is missing")]
    RepositoryUrlMissing,

    #[error("cluster url is missing")]
    ClusterUrlMissing,

    #[error("path is missing")]
    PathMissing,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    MalformedJson(#[from] serde_json::Error),

    #[error(transparent)]
    K8s(#[from] K8sError),
}

impl ResponseError for ApplicationError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::MalformedJson(_) | ApplicationError::K8s(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

/// Payload of `POST /argo/create`.
///
/// Absent and `null` fields decode as empty strings and are reported by
/// [`CreateApplicationRequest::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateApplicationRequest {
    #[serde(rename = "applicationName", deserialize_with = "null_as_empty")]
    #[schema(example = "guestbook", required = true)]
    pub application_name: String,
    #[serde(rename = "repositoryURL", deserialize_with = "null_as_empty")]
    #[schema(
        example = "https://github.com/argoproj/argocd-example-apps",
        required = true
    )]
    pub repository_url: String,
    /// Checked for presence only; applications always deploy to the local cluster.
    #[serde(rename = "clusterURL", deserialize_with = "null_as_empty")]
    #[schema(example = "https://kubernetes.default.svc", required = true)]
    pub cluster_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "guestbook", required = true)]
    pub path: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CreateApplicationRequest {
    /// Decodes the first JSON value in `body`. Anything after it is ignored.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);

        Self::deserialize(&mut deserializer)
    }

    /// Checks that every field is non-empty, reporting the first one that is
    /// not in the order name, repository url, cluster url, path.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.application_name.is_empty() {
            return Err(ValidationError::ApplicationNameMissing);
        }

        if self.repository_url.is_empty() {
            return Err(ValidationError::RepositoryUrlMissing);
        }

        if self.cluster_url.is_empty() {
            return Err(ValidationError::ClusterUrlMissing);
        }

        if self.path.is_empty() {
            return Err(ValidationError::PathMissing);
        }

        Ok(())
    }
}

#[utoipa::path(
    summary = "List applications",
    description = "Returns the names of at most 10 applications in the argocd namespace.",
    responses(
        (status = 200, description = "Application names", body = Vec<String>),
        (status = 500, description = "Cluster error", body = String, content_type = "text/plain"),
    ),
    tag = "Applications"
)]
#[get("/argo/list")]
pub async fn list_applications(
    k8s_client: Data<dyn K8sClient>,
) -> Result<impl Responder, ApplicationError> {
    let applications = k8s_client.list_applications(LIST_LIMIT).await?;

    let names: Vec<String> = applications
        .iter()
        .take(LIST_LIMIT as usize)
        .map(|application| application.name_any())
        .collect();

    Ok(Json(names))
}

#[utoipa::path(
    summary = "Create an application",
    description = "Creates an automatically synced application tracking `HEAD` of the given repository path.",
    request_body = CreateApplicationRequest,
    responses(
        (status = 200, description = "Application created"),
        (status = 400, description = "A required field is missing", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed JSON or cluster error", body = String, content_type = "text/plain"),
    ),
    tag = "Applications"
)]
#[post("/argo/create")]
pub async fn create_application(
    k8s_client: Data<dyn K8sClient>,
    body: Bytes,
    root_span: RootSpan,
) -> Result<impl Responder, ApplicationError> {
    let request = CreateApplicationRequest::from_body(&body)?;

    root_span.record("application", request.application_name.as_str());

    request.validate()?;

    let application = Application::from(request);
    k8s_client.create_application(&application).await?;

    info!(name = %application.name_any(), "application created");

    Ok(HttpResponse::Ok().finish())
}

#[utoipa::path(
    summary = "Delete an application",
    params(
        ("applicationName" = String, Path, description = "Name of the application"),
    ),
    responses(
        (status = 204, description = "Application deleted"),
        (status = 500, description = "Cluster error", body = String, content_type = "text/plain"),
    ),
    tag = "Applications"
)]
#[delete("/argo/delete/{applicationName}")]
pub async fn delete_application(
    k8s_client: Data<dyn K8sClient>,
    application_name: Path<String>,
    root_span: RootSpan,
) -> Result<impl Responder, ApplicationError> {
    let application_name = application_name.into_inner();

    root_span.record("application", application_name.as_str());

    k8s_client.delete_application(&application_name).await?;

    info!(name = %application_name, "application deleted");

    Ok(HttpResponse::NoContent().finish())
}
