use axum::{
    http::{header::COOKIE, header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    middleware::from_fn,
    routing::get,
    Router,
};
use test_utils::server::spawn_router;

use crate::server::{
    error::AppError,
    middleware::session::{guard_redirect, has_session_cookie, route_guard},
};
