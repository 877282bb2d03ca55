//! Extractors whose rejections go through [`ApiError`] instead of axum's
//! plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts};

use crate::api::errors::ApiError;

/// `axum::Json` with rejections translated like every other error
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` with rejections translated like every other error
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);
