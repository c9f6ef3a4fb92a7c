use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::CreateContactDto;
use crate::features::contact::models::{ContactSubmission, NewContactSubmission};
use crate::features::notifications::NotificationService;
use crate::shared::constants::CONTACT_ACK_MESSAGE;
use crate::shared::types::SubmissionResponseDto;
use crate::shared::validation::is_blank;

/// Stores contact submissions and notifies the contact recipient
pub struct ContactService {
    pool: SqlitePool,
    notifications: Arc<NotificationService>,
    recipient: String,
}

impl ContactService {
    pub fn new(
        pool: SqlitePool,
        notifications: Arc<NotificationService>,
        recipient: String,
    ) -> Self {
        Self {
            pool,
            notifications,
            recipient,
        }
    }

    /// Store a contact submission, then send a best-effort notification.
    ///
    /// Blank `message` or `name` is rejected before anything is written.
    pub async fn create(&self, dto: CreateContactDto) -> Result<SubmissionResponseDto> {
        if is_blank(&dto.message) {
            return Err(AppError::BadRequest("Message is required".to_string()));
        }
        if is_blank(&dto.name) {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let submission = self.insert(NewContactSubmission::from(&dto)).await?;

        tracing::info!("Contact submission stored: id={}", submission.id);

        let outcome = self
            .notifications
            .notify(
                &submission.notification_subject(),
                &submission.notification_body(),
                &self.recipient,
            )
            .await;
        tracing::debug!("Contact notification {:?}: id={}", outcome, submission.id);

        Ok(SubmissionResponseDto {
            id: submission.id,
            message: CONTACT_ACK_MESSAGE.to_string(),
        })
    }

    async fn insert(&self, new: NewContactSubmission) -> Result<ContactSubmission> {
        // Dropping the transaction on an error path rolls back and releases the connection
        let mut tx = self.pool.begin().await?;

        let submission = sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions (name, email, role, program, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, email, role, program, message, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.role)
        .bind(new.program)
        .bind(new.message)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert contact submission: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await?;

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DatabaseConfig;
    use crate::core::database;
    use crate::shared::test_helpers::RecordingMailer;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn dto(message: &str) -> CreateContactDto {
        CreateContactDto {
            name: Name().fake(),
            email: SafeEmail().fake(),
            role: None,
            program: None,
            message: message.to_string(),
        }
    }

    async fn count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_stores_and_notifies() {
        let pool = database::test_pool().await;
        let mailer = Arc::new(RecordingMailer::default());
        let notifications = Arc::new(NotificationService::new(
            "union@example.org".to_string(),
            mailer.clone(),
        ));
        let service = ContactService::new(pool.clone(), notifications, "desk@example.org".to_string());

        let response = service.create(dto("Hello organizers")).await.unwrap();

        assert_eq!(response.message, CONTACT_ACK_MESSAGE);
        assert_eq!(count(&pool).await, 1);

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "desk@example.org");
        assert!(sent[0].body.ends_with("Message:\nHello organizers"));
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected_without_side_effects() {
        let pool = database::test_pool().await;
        let mailer = Arc::new(RecordingMailer::default());
        let notifications = Arc::new(NotificationService::new(
            "union@example.org".to_string(),
            mailer.clone(),
        ));
        let service = ContactService::new(pool.clone(), notifications, "desk@example.org".to_string());

        for blank in ["", "   "] {
            let err = service.create(dto(blank)).await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(ref m) if m == "Message is required"));
        }

        assert_eq!(count(&pool).await, 0);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_mail_failure_does_not_fail_request() {
        let pool = database::test_pool().await;
        let notifications = Arc::new(NotificationService::new(
            "union@example.org".to_string(),
            Arc::new(RecordingMailer::failing()),
        ));
        let service = ContactService::new(pool.clone(), notifications, "desk@example.org".to_string());

        assert!(service.create(dto("Still stored")).await.is_ok());
        assert_eq!(count(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let path = std::env::temp_dir().join(format!("wcaunion-{}.db", uuid::Uuid::new_v4()));
        let pool = database::create_pool(&DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 4,
            acquire_timeout_secs: 5,
            busy_timeout_secs: 5,
        })
        .await
        .unwrap();
        database::migrate(&pool).await.unwrap();

        let service = ContactService::new(
            pool.clone(),
            Arc::new(NotificationService::disabled()),
            String::new(),
        );

        let (a, b) = tokio::join!(service.create(dto("first")), service.create(dto("second")));
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.id, b.id);
        assert_eq!(count(&pool).await, 2);

        pool.close().await;
        let _ = std::fs::remove_file(&path);
    }
}
