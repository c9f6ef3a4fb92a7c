use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::validate_email_address;

/// Request DTO for the "get involved" form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGetInvolvedDto {
    /// Required, must not be blank
    pub name: String,

    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    pub phone: Option<String>,
    pub role: Option<String>,
    pub program: Option<String>,

    /// Free-text category, e.g. "Help organize" or "Stay updated"
    pub interest_level: Option<String>,

    /// Workplace concerns or notes for the organizers
    pub concerns: Option<String>,
}
