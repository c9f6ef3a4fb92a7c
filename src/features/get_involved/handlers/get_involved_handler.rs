use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::get_involved::dtos::CreateGetInvolvedDto;
use crate::features::get_involved::services::GetInvolvedService;
use crate::shared::types::{ErrorResponse, SubmissionResponseDto};

/// Sign up to get involved
#[utoipa::path(
    post,
    path = "/api/get-involved",
    request_body = CreateGetInvolvedDto,
    responses(
        (status = 201, description = "Sign-up stored", body = SubmissionResponseDto),
        (status = 400, description = "Name is blank", body = ErrorResponse),
        (status = 422, description = "Malformed email or missing field", body = ErrorResponse)
    ),
    tag = "get-involved"
)]
pub async fn create_get_involved(
    State(service): State<Arc<GetInvolvedService>>,
    AppJson(dto): AppJson<CreateGetInvolvedDto>,
) -> Result<(StatusCode, Json<SubmissionResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
