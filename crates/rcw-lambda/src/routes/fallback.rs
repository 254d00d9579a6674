use axum::Json;
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

fn is_supported(method: &Method) -> bool {
    method == Method::GET || method == Method::POST
}

fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageBody {
            message: "Method Not Allowed",
        }),
    )
        .into_response()
}

/// Rejects every method other than GET and POST before routing. GET routes
/// would otherwise also answer HEAD.
pub async fn only_get_and_post(req: Request, next: Next) -> Response {
    if is_supported(req.method()) {
        next.run(req).await
    } else {
        method_not_allowed()
    }
}

/// Catch-all for requests no route accepts.
///
/// GET and POST are the supported methods, so for them an unmatched
/// request means an unknown path (404). Anything else is 405.
pub async fn unmatched(method: Method) -> Response {
    if is_supported(&method) {
        (
            StatusCode::NOT_FOUND,
            Json(MessageBody {
                message: "Not Found",
            }),
        )
            .into_response()
    } else {
        method_not_allowed()
    }
}
