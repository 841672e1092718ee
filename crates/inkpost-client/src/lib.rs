//! # Inkpost Client
//!
//! Client side of Inkpost: an HTTP API client, a single reducer-driven state
//! store and headless view components that render state and request
//! navigation.
//!
//! ```ignore
//! let api = HttpPostApi::new(&ClientConfig::from_env())?;
//! let mut app = ClientApp::new(PostContext::new(api));
//! app.open(Route::Home).await;
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod context;
pub mod route;
pub mod state;
pub mod views;

#[cfg(test)]
pub(crate) mod fake;

pub use api::{ApiError, HttpPostApi, PostApi};
pub use app::{ClientApp, Screen};
pub use config::ClientConfig;
pub use context::PostContext;
pub use route::{Navigation, Route};
pub use state::{PostState, Transition, reduce};
