use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::ServiceResponse;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

/// Media type of every error body served by this API.
pub const PROBLEM_JSON: &str = "application/problem+json";

const TYPE_BASE: &str = "https://api.bank.example.com/problems";

/// RFC 7807 problem document. All non-2xx responses use this shape.
#[derive(Debug, Serialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
}

impl Problem {
    /// A 400 for rejected caller input; `detail` carries the validation
    /// message verbatim.
    pub fn validation_error(detail: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            problem_type: format!("{TYPE_BASE}/validation-error"),
            title: "Validation Failed".to_string(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            detail: detail.into(),
            instance: instance.into(),
        }
    }

    /// A 404 for lookups that legitimately found nothing.
    pub fn not_found(detail: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            problem_type: format!("{TYPE_BASE}/resource-not-found"),
            title: "Not Found".to_string(),
            status: StatusCode::NOT_FOUND.as_u16(),
            detail: detail.into(),
            instance: instance.into(),
        }
    }

    /// A 500 with a fixed detail; internal error text never reaches the
    /// caller.
    pub fn internal_error(instance: impl Into<String>) -> Self {
        Self {
            problem_type: format!("{TYPE_BASE}/internal-error"),
            title: "Internal Server Error".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: "Unexpected error in the server".to_string(),
            instance: instance.into(),
        }
    }

    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .content_type(PROBLEM_JSON)
        .json(self)
    }
}

/// Json extractor configuration that turns payload errors (malformed JSON,
/// type mismatches) into 400 problem documents instead of actix's default
/// plain-text bodies.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let problem = Problem::validation_error(err.to_string(), req.path());
    InternalError::from_response(err, problem.into_response()).into()
}

/// `ErrorHandlers` hook that rewrites any 500 into a generic problem
/// document so unhandled faults never leak internals.
pub fn render_internal_error<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, _) = res.into_parts();
    let response: HttpResponse<BoxBody> = Problem::internal_error(req.path()).into_response();
    let res: ServiceResponse<EitherBody<B, BoxBody>> =
        ServiceResponse::new(req, response).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
