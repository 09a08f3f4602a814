//! Domain layer containing the article entity and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Plain data structures
//! - [`repositories`] - Data access and search trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Implementations of the traits live in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
