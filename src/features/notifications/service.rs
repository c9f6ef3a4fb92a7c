use std::sync::Arc;

use crate::core::config::SmtpConfig;
use crate::modules::email::{Mailer, OutgoingEmail, SmtpMailer};

/// What happened to a notification. Failures are logged, not returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Delivery was tried; it may or may not have succeeded
    Attempted,
    /// Mail settings or recipient missing; nothing was sent
    Skipped,
}

/// Sends submission notifications from the configured sender address
pub struct NotificationService {
    sender: Option<String>,
    mailer: Option<Arc<dyn Mailer>>,
}

impl NotificationService {
    pub fn new(sender: String, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            sender: Some(sender),
            mailer: Some(mailer),
        }
    }

    /// A service that skips every notification
    pub fn disabled() -> Self {
        Self {
            sender: None,
            mailer: None,
        }
    }

    /// Build from SMTP settings. Incomplete settings yield a disabled service
    /// so the API keeps working without outbound mail.
    pub fn from_config(config: &SmtpConfig) -> Self {
        let Some((host, port, username, password)) = config.credentials() else {
            tracing::warn!("SMTP config incomplete; notification emails are disabled");
            return Self::disabled();
        };

        match SmtpMailer::new(host, port, username, password) {
            Ok(mailer) => {
                tracing::info!("SMTP notifications enabled via {}:{}", host, port);
                Self::new(username.to_string(), Arc::new(mailer))
            }
            Err(e) => {
                tracing::error!("Failed to initialize SMTP client: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.mailer.is_some()
    }

    /// Send a plain-text notification. Never fails.
    pub async fn notify(&self, subject: &str, body: &str, recipient: &str) -> NotifyOutcome {
        let (Some(sender), Some(mailer)) = (&self.sender, &self.mailer) else {
            tracing::warn!("Email not sent: SMTP config incomplete.");
            return NotifyOutcome::Skipped;
        };
        if recipient.trim().is_empty() {
            tracing::warn!("Email not sent: SMTP config incomplete.");
            return NotifyOutcome::Skipped;
        }

        let email = OutgoingEmail {
            from: sender.clone(),
            to: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        };

        match mailer.send(email).await {
            Ok(()) => tracing::info!("Notification email sent to {}", recipient),
            Err(e) => tracing::error!(
                "Failed to send notification email to {}: {:?}",
                recipient,
                e
            ),
        }

        NotifyOutcome::Attempted
    }
}
