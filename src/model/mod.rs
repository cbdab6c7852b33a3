//! Wire types shared by the browser client and the server.
//!
//! Field names on the wire follow the backend API (camelCase, Portuguese);
//! the Rust side uses English names with `serde` renames.

pub mod affiliate;
pub mod api;
pub mod auth;
pub mod member;
pub mod plan;
pub mod validation;

#[cfg(test)]
mod test;
