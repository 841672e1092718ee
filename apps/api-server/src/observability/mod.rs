//! Observability module - request IDs for log correlation.

pub mod request_id;

pub use request_id::request_id;
