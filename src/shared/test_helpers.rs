#[cfg(test)]
use crate::modules::email::{MailError, Mailer, OutgoingEmail};

#[cfg(test)]
use std::sync::Mutex;

/// Mailer double that records every message instead of sending it
#[cfg(test)]
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

#[cfg(test)]
impl RecordingMailer {
    /// A mailer whose every send fails after being recorded
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        if self.fail {
            return Err(MailError::Smtp("connection refused".to_string()));
        }
        Ok(())
    }
}
