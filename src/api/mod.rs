//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into commands and queries and formats
//! outcomes according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Wire-level resources for request/response serialization
//! - [`transform`] - Pure mappings between resources and domain shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod transform;
