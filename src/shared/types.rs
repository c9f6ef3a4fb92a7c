use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// `detail` is the human-readable message the website shows to the visitor.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(detail: String, errors: Option<Vec<String>>) -> Self {
        Self { detail, errors }
    }
}

/// Acknowledgment returned after a submission has been stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponseDto {
    /// Generated identifier of the stored submission
    pub id: i64,
    /// Fixed acknowledgment text shown to the visitor
    pub message: String,
}
