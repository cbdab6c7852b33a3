//! MemberDesk Test Utils
//!
//! Shared helpers for driving the proxy over real sockets in integration tests.
//!
//! # Overview
//!
//! - **BackendBuilder**: Fluent builder for a mock backend with a canned response
//! - **MockBackend**: Running mock backend that records every request it receives
//! - **spawn_router**: Serves any axum router on an ephemeral local port
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::BackendBuilder;
//!
//! #[tokio::test]
//! async fn forwards_request() -> Result<(), TestError> {
//!     let backend = BackendBuilder::new()
//!         .status(200)
//!         .json(r#"{"data":[]}"#)
//!         .build()
//!         .await?;
//!
//!     // Point the proxy at backend.url and send requests...
//!     let recorded = backend.requests().await;
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod builder;
pub mod error;
pub mod server;
