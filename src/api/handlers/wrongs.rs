use axum::http::{Method, Uri};

use crate::api::errors::ApiError;

/// Fallback for any route or method the API does not serve
///
/// Mounted behind the authentication gate, so unauthenticated callers get a
/// 401 before they learn whether a path exists.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Requested resource not found")
}

/// Method fallback for the public routes, which sit outside the gate
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::method_not_allowed(format!("{} is not supported on {}", method, uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn method_not_allowed_names_method_and_path() {
        let err = method_not_allowed(Method::GET, Uri::from_static("/signin")).await;

        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            err.client_message(),
            "caught MethodNotAllowedError error: GET is not supported on /signin"
        );
    }
}
