use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::validate_email_address;

/// Request DTO for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    pub name: String,

    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    /// Visitor's role, e.g. "Case manager"
    pub role: Option<String>,

    /// Program the visitor works in
    pub program: Option<String>,

    /// The message itself (required, must not be blank)
    pub message: String,
}
