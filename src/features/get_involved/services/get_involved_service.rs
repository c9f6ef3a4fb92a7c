use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::get_involved::dtos::CreateGetInvolvedDto;
use crate::features::get_involved::models::{GetInvolvedSubmission, NewGetInvolvedSubmission};
use crate::features::notifications::NotificationService;
use crate::shared::constants::GET_INVOLVED_ACK_MESSAGE;
use crate::shared::types::SubmissionResponseDto;
use crate::shared::validation::is_blank;

/// Stores "get involved" sign-ups and notifies the organizing recipient
pub struct GetInvolvedService {
    pool: SqlitePool,
    notifications: Arc<NotificationService>,
    recipient: String,
}

impl GetInvolvedService {
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

    /// Store a sign-up, then send a best-effort notification.
    ///
    /// A blank `name` is rejected before anything is written.
    pub async fn create(&self, dto: CreateGetInvolvedDto) -> Result<SubmissionResponseDto> {
        if is_blank(&dto.name) {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let submission = self.insert(NewGetInvolvedSubmission::from(&dto)).await?;

        tracing::info!(
            "Get-involved submission stored: id={}, interest_level={:?}",
            submission.id,
            submission.interest_level
        );

        let outcome = self
            .notifications
            .notify(
                &submission.notification_subject(),
                &submission.notification_body(),
                &self.recipient,
            )
            .await;
        tracing::debug!("Get-involved notification {:?}: id={}", outcome, submission.id);

        Ok(SubmissionResponseDto {
            id: submission.id,
            message: GET_INVOLVED_ACK_MESSAGE.to_string(),
        })
    }

    async fn insert(&self, new: NewGetInvolvedSubmission) -> Result<GetInvolvedSubmission> {
        // Dropping the transaction on an error path rolls back and releases the connection
        let mut tx = self.pool.begin().await?;

        let submission = sqlx::query_as::<_, GetInvolvedSubmission>(
            r#"
            INSERT INTO get_involved_submissions (
                name, email, phone, role, program, interest_level, concerns, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, email, phone, role, program, interest_level, concerns, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.phone)
        .bind(new.role)
        .bind(new.program)
        .bind(new.interest_level)
        .bind(new.concerns)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert get-involved submission: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await?;

        Ok(submission)
    }
}
