use axum::extract::FromRequest;

use crate::error::WebError;

/// `axum::Json` with rejections reported through [`WebError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct JsonBody<T>(pub T);
