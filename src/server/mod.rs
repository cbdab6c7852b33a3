//! Server side of the application: a session-aware proxy in front of the
//! backend API plus the page guard.
//!
//! The browser never talks to the backend directly. Entity calls go through
//! `/api/proxy/*` and authentication calls through `/api/auth/*`; both are
//! forwarded with the caller's cookies and relayed back unchanged.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers for the proxy routes
//! - **Service Layer** (`service/`) - URL rewriting, cookie forwarding and response relaying
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Redirects between login and dashboard pages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared HTTP client and backend origin
//! - **Startup** (`startup`) - Construction of the outbound HTTP client
//! - **Router** (`router`) - Axum route configuration
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
mod test;
