//! Domain layer containing business entities and logic.
//!
//! Defines the favorite source entity, the command and query value objects
//! that carry request parameters into the application layer, the repository
//! contract, and the tagged failure reasons shared by every layer above.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`commands`] - State-mutating request parameters
//! - [`queries`] - Read-only request parameters
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Domain failure reasons
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])

pub mod commands;
pub mod entities;
pub mod error;
pub mod queries;
pub mod repositories;
