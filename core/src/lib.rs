//! Synchronous client and scenario helpers for a users CRUD API.
//!
//! # Overview
//! `UserClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `UserApi` pairs it with a `Transport`
//! (ureq by default) to give one call per operation, which the end-to-end
//! scenarios in `tests/` compose into create/list/update/delete lifecycles.
//!
//! # Design
//! - `UserClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and unit-testable.
//! - DTOs are defined independently from the mock-server crate; the
//!   scenario tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod random;
pub mod steps;
pub mod transport;
pub mod types;

pub use api::UserApi;
pub use client::UserClient;
pub use crate::config::HarnessConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use random::random_word;
pub use transport::{Transport, UreqTransport};
pub use types::{User, UserData};
