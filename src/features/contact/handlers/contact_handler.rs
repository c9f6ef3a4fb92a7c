use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::contact::dtos::CreateContactDto;
use crate::features::contact::services::ContactService;
use crate::shared::types::{ErrorResponse, SubmissionResponseDto};

/// Submit the contact form
///
/// Public endpoint. Stores the message and emails the organizers; a mail
/// failure does not affect the response.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact submission stored", body = SubmissionResponseDto),
        (status = 400, description = "Message or name is blank", body = ErrorResponse),
        (status = 422, description = "Malformed email or missing field", body = ErrorResponse)
    ),
    tag = "contact"
)]
pub async fn create_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<SubmissionResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database;
    use crate::features::contact::routes::routes;
    use crate::features::notifications::NotificationService;
    use crate::shared::constants::CONTACT_ACK_MESSAGE;
    use crate::shared::test_helpers::RecordingMailer;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use sqlx::SqlitePool;

    async fn server_with(notifications: NotificationService) -> (TestServer, SqlitePool) {
        let pool = database::test_pool().await;
        let service = ContactService::new(
            pool.clone(),
            Arc::new(notifications),
            "desk@example.org".to_string(),
        );
        let server = TestServer::new(routes(Arc::new(service))).unwrap();
        (server, pool)
    }

    async fn stored_rows(pool: &SqlitePool) -> Vec<(i64, String, String, Option<String>, Option<String>, String)> {
        sqlx::query_as("SELECT id, name, email, role, program, message FROM contact_submissions ORDER BY id")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_contact_returns_id_and_ack() {
        let (server, pool) = server_with(NotificationService::disabled()).await;

        let response = server
            .post("/api/contact")
            .json(&json!({
                "name": "  Ana Lopez ",
                "email": "a@b.com",
                "role": "  Case manager ",
                "program": "   ",
                "message": " The heat is broken on 3 "
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], CONTACT_ACK_MESSAGE);

        let rows = stored_rows(&pool).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(body["id"], rows[0].0);
        assert_eq!(rows[0].1, "Ana Lopez");
        assert_eq!(rows[0].2, "a@b.com");
        assert_eq!(rows[0].3.as_deref(), Some("Case manager"));
        assert_eq!(rows[0].4, None);
        assert_eq!(rows[0].5, "The heat is broken on 3");
    }

    #[tokio::test]
    async fn test_optional_fields_absent_null_or_blank_are_equivalent() {
        let (server, pool) = server_with(NotificationService::disabled()).await;

        let payloads = [
            json!({ "name": "A", "email": "a@b.com", "message": "m" }),
            json!({ "name": "A", "email": "a@b.com", "message": "m", "role": null, "program": null }),
            json!({ "name": "A", "email": "a@b.com", "message": "m", "role": "  ", "program": "" }),
        ];
        for payload in payloads {
            server
                .post("/api/contact")
                .json(&payload)
                .await
                .assert_status(StatusCode::CREATED);
        }

        let rows = stored_rows(&pool).await;
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.3.is_none() && r.4.is_none()));
    }

    #[tokio::test]
    async fn test_blank_message_is_bad_request() {
        let (server, pool) = server_with(NotificationService::disabled()).await;

        for blank in ["", "   "] {
            let response = server
                .post("/api/contact")
                .json(&json!({ "name": "Ana", "email": "a@b.com", "message": blank }))
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            assert_eq!(response.json::<Value>()["detail"], "Message is required");
        }

        assert!(stored_rows(&pool).await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_email_is_unprocessable() {
        let (server, pool) = server_with(NotificationService::disabled()).await;

        for email in ["not-an-email", "ana@", "@example.org", "a@b", "ana@localhost"] {
            server
                .post("/api/contact")
                .json(&json!({ "name": "Ana", "email": email, "message": "hi" }))
                .await
                .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        }

        assert!(stored_rows(&pool).await.is_empty());
    }

    #[tokio::test]
    async fn test_email_is_trimmed_before_check_and_storage() {
        let (server, pool) = server_with(NotificationService::disabled()).await;

        server
            .post("/api/contact")
            .json(&json!({ "name": "Ana", "email": " a@b.com ", "message": "hi" }))
            .await
            .assert_status(StatusCode::CREATED);

        let rows = stored_rows(&pool).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].2, "a@b.com");
    }

    #[tokio::test]
    async fn test_missing_required_field_is_unprocessable() {
        let (server, pool) = server_with(NotificationService::disabled()).await;

        server
            .post("/api/contact")
            .json(&json!({ "name": "Ana", "email": "a@b.com" }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        server
            .post("/api/contact")
            .json(&json!({ "name": "Ana", "email": "a@b.com", "message": null }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        assert!(stored_rows(&pool).await.is_empty());
    }

    #[tokio::test]
    async fn test_notification_goes_to_contact_recipient() {
        let mailer = Arc::new(RecordingMailer::default());
        let (server, _pool) = server_with(NotificationService::new(
            "union@example.org".to_string(),
            mailer.clone(),
        ))
        .await;

        server
            .post("/api/contact")
            .json(&json!({ "name": "Ana", "email": "a@b.com", "message": "hi" }))
            .await
            .assert_status(StatusCode::CREATED);

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "union@example.org");
        assert_eq!(sent[0].to, "desk@example.org");
        assert_eq!(sent[0].subject, "[WCA Union] New contact from Ana");
    }

    #[tokio::test]
    async fn test_store_failure_is_server_error_and_sends_nothing() {
        let mailer = Arc::new(RecordingMailer::default());
        let (server, pool) = server_with(NotificationService::new(
            "union@example.org".to_string(),
            mailer.clone(),
        ))
        .await;
        pool.close().await;

        let response = server
            .post("/api/contact")
            .json(&json!({ "name": "Ana", "email": "a@b.com", "message": "hi" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(mailer.sent().is_empty());
    }
}
