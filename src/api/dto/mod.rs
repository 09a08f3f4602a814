//! Data Transfer Objects for API requests and responses.

pub mod article;
pub mod health;
