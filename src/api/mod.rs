//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - wire models (camelCase JSON) and query parameters
//! - [`extract`] - validating JSON extractor
//! - [`handlers`] - HTTP request handlers
//! - [`links`] - `Location` header paths
//! - [`mapper`] - entity <-> model conversions
//! - [`middleware`] - request processing middleware
//! - [`routes`] - route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod links;
pub mod mapper;
pub mod middleware;
pub mod routes;
