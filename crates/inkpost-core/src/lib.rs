//! # Inkpost Core
//!
//! The domain layer of Inkpost.
//! This crate contains the post model, its validation rules and the
//! `PostStore` service, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::DomainError;
pub use store::PostStore;
