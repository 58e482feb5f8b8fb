use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

/// Body for requests rejected before reaching a handler, such as a payload
/// with a wrong field type or an unknown key.
pub fn invalid_request(err: poem::Error) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "ValidationError",
        format!("request.invalid_body: {}", err),
    ))
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
