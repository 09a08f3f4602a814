//! Utility functions used across the application.
//!
//! - [`article_factory`] - Synthetic article generation for seeding and tests
//! - [`lorem`] - Placeholder sentence and paragraph text

pub mod article_factory;
pub mod lorem;
