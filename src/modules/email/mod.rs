//! Outbound email over SMTP
//!
//! Provides the [`Mailer`] seam used by the notification service and its
//! production implementation, an authenticated STARTTLS submission client.

mod smtp_mailer;

pub use smtp_mailer::{MailError, Mailer, OutgoingEmail, SmtpMailer};
