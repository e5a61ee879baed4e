//! A single-store, reducer-based state container with a counter example.

pub mod app;
pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod store;
