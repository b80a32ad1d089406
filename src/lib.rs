//! Fetch-validate-render building blocks.
//!
//! A [`fetch::FetchController`] drives one request/response cycle for a
//! remote resource, validates the payload against a [`schema::ValidationSchema`]
//! and publishes a [`fetch::FetchState`] that the UI layer renders.

pub mod cli;
pub mod config;
pub mod fault;
pub mod fetch;
pub mod headless;
pub mod logging;
pub mod resources;
pub mod schema;
pub mod ui;
