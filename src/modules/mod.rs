//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services. Currently only
//! outbound SMTP mail.

pub mod email;
