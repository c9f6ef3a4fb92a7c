use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::contact::dtos::CreateContactDto;
use crate::shared::constants::{EMAIL_SUBJECT_PREFIX, NOT_PROVIDED};
use crate::shared::validation::{normalize_optional, normalize_required};

/// Database model for a stored contact submission
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub program: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Normalized fields ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub program: Option<String>,
    pub message: String,
}

impl From<&CreateContactDto> for NewContactSubmission {
    fn from(dto: &CreateContactDto) -> Self {
        Self {
            name: normalize_required(&dto.name),
            email: normalize_required(&dto.email),
            role: normalize_optional(dto.role.as_deref()),
            program: normalize_optional(dto.program.as_deref()),
            message: normalize_required(&dto.message),
        }
    }
}

impl ContactSubmission {
    pub fn notification_subject(&self) -> String {
        format!("{} New contact from {}", EMAIL_SUBJECT_PREFIX, self.name)
    }

    pub fn notification_body(&self) -> String {
        [
            format!("Name: {}", self.name),
            format!("Email: {}", self.email),
            format!("Role: {}", self.role.as_deref().unwrap_or(NOT_PROVIDED)),
            format!("Program: {}", self.program.as_deref().unwrap_or(NOT_PROVIDED)),
            String::new(),
            "Message:".to_string(),
            self.message.clone(),
        ]
        .join("\n")
    }
}
