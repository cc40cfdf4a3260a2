//! Game logic for Dart Atlas, independent of the browser and of any map widget.

pub mod config;
pub mod drag;
pub mod error;
pub mod geocode;
pub mod geometry;
pub mod models;
pub mod presenter;
pub mod provider;
pub mod session;
