//! Adds the request path to error envelopes.

use axum::{
    Json,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ErrorBody, ErrorInfo};

/// Re-renders [`AppError`](crate::error::AppError) responses with `error.path`
/// set to the request path. Other responses pass through untouched.
///
/// Must wrap the top-level router so nested routes still see the full path.
pub async fn attach_error_path(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let mut response = next.run(req).await;

    match response.extensions_mut().remove::<ErrorInfo>() {
        Some(mut info) => {
            info.path = Some(path);
            (response.status(), Json(ErrorBody { error: info })).into_response()
        }
        None => response,
    }
}
