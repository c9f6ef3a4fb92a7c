//! Liveness check.

pub mod handler;
pub mod routes;
