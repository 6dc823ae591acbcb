//! HTTP middleware.
//!
//! - [`tracing`] - request/response spans

pub mod tracing;
