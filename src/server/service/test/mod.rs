use axum::{
    body::Body,
    extract::Request,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE, TRANSFER_ENCODING},
        HeaderMap, HeaderValue, Method, StatusCode,
    },
};

use crate::server::{
    error::{proxy::ProxyError, AppError},
    service::proxy::{
        cookie_header, relay_response, target_url, ProxyRequest, ProxyScope, MAX_BODY_BYTES,
    },
};


const BACKEND: &str = "http://localhost:3333";
