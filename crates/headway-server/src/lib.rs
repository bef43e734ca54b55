//! headway-server
//!
//! Thin HTTP transport over [`headway_core`]: a plain-text API for
//! submitting jobs and watching their progress.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
