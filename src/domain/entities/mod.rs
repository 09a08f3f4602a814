//! Core domain entities.
//!
//! - [`Article`] - A persisted article
//! - [`NewArticle`] - Attribute set used to create an article

pub mod article;

pub use article::{Article, NewArticle};
