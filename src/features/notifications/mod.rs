//! Best-effort email notifications for new submissions.
//!
//! Delivery problems never reach the caller: a submission is accepted once it
//! is stored, whether or not the organizers' inbox hears about it.

pub mod service;

pub use service::{NotificationService, NotifyOutcome};
