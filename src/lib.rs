//! Backend-for-frontend for the watchlist client.
//!
//! Caches each profile's shows from the upstream watchlist server and serves
//! filtered, sorted views of them along with the filter facets.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
