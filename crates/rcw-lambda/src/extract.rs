use axum::Json;
use axum::extract::FromRequest;

use crate::error::ApiError;

/// `Json` extractor whose rejections render as `ApiError` bodies.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
