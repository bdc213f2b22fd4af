use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use foundation::viewport::ViewportError;
use layers::LayerParseError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Startup and serve failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid startup viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("pick tolerance {0} must be a finite, non-negative number of degrees")]
    PickTolerance(f64),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level failures, reported to the client as JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid viewport event: {0}")]
    InvalidViewport(#[from] ViewportError),
    #[error(transparent)]
    UnknownLayer(#[from] LayerParseError),
    #[error("invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error("no feature at that position")]
    NothingPicked,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidViewport(_) | ApiError::UnknownLayer(_) | ApiError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NothingPicked => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::BAD_REQUEST {
            warn!("rejected request: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use foundation::viewport::ViewportError;
    use layers::LayerParseError;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::from(ViewportError::NegativeZoom(-2.0)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(LayerParseError("roads".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NothingPicked.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn messages_name_the_problem() {
        let err = ApiError::from(ViewportError::Latitude(120.0));
        assert_eq!(
            err.to_string(),
            "invalid viewport event: latitude 120 outside [-90, 90]"
        );
    }
}
