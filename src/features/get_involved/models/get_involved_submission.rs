use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::get_involved::dtos::CreateGetInvolvedDto;
use crate::shared::constants::{EMAIL_SUBJECT_PREFIX, NOT_PROVIDED};
use crate::shared::validation::{normalize_optional, normalize_required};

/// Database model for a stored "get involved" sign-up
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct GetInvolvedSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub program: Option<String>,
    pub interest_level: Option<String>,
    pub concerns: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGetInvolvedSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub program: Option<String>,
    pub interest_level: Option<String>,
    pub concerns: Option<String>,
}

impl From<&CreateGetInvolvedDto> for NewGetInvolvedSubmission {
    fn from(dto: &CreateGetInvolvedDto) -> Self {
        Self {
            name: normalize_required(&dto.name),
            email: normalize_required(&dto.email),
            phone: normalize_optional(dto.phone.as_deref()),
            role: normalize_optional(dto.role.as_deref()),
            program: normalize_optional(dto.program.as_deref()),
            interest_level: normalize_optional(dto.interest_level.as_deref()),
            concerns: normalize_optional(dto.concerns.as_deref()),
        }
    }
}

impl GetInvolvedSubmission {
    pub fn notification_subject(&self) -> String {
        format!(
            "{} New Get Involved submission from {}",
            EMAIL_SUBJECT_PREFIX, self.name
        )
    }

    pub fn notification_body(&self) -> String {
        let or_missing =
            |value: &Option<String>| value.as_deref().unwrap_or(NOT_PROVIDED).to_string();

        [
            format!("Name: {}", self.name),
            format!("Email: {}", self.email),
            format!("Phone: {}", or_missing(&self.phone)),
            format!("Role: {}", or_missing(&self.role)),
            format!("Program: {}", or_missing(&self.program)),
            format!("Interest level: {}", or_missing(&self.interest_level)),
            String::new(),
            "Concerns / notes:".to_string(),
            self.concerns
                .clone()
                .unwrap_or_else(|| "(none provided)".to_string()),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> GetInvolvedSubmission {
        GetInvolvedSubmission {
            id: 3,
            name: "Marcus Reed".to_string(),
            email: "marcus@example.org".to_string(),
            phone: Some("213-555-0199".to_string()),
            role: None,
            program: None,
            interest_level: Some("Help organize".to_string()),
            concerns: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_notification_subject() {
        assert_eq!(
            submission().notification_subject(),
            "[WCA Union] New Get Involved submission from Marcus Reed"
        );
    }

    #[test]
    fn test_notification_body_fills_placeholders() {
        let body = submission().notification_body();
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Name: Marcus Reed",
                "Email: marcus@example.org",
                "Phone: 213-555-0199",
                "Role: (not provided)",
                "Program: (not provided)",
                "Interest level: Help organize",
                "",
                "Concerns / notes:",
                "(none provided)",
            ]
        );
    }

    #[test]
    fn test_new_submission_collapses_blank_optionals() {
        let dto = CreateGetInvolvedDto {
            name: " Marcus ".to_string(),
            email: "marcus@example.org".to_string(),
            phone: Some(" ".to_string()),
            role: None,
            program: Some("".to_string()),
            interest_level: Some(" Stay updated ".to_string()),
            concerns: Some("\t".to_string()),
        };

        let new = NewGetInvolvedSubmission::from(&dto);
        assert_eq!(new.name, "Marcus");
        assert_eq!(new.phone, None);
        assert_eq!(new.program, None);
        assert_eq!(new.interest_level.as_deref(), Some("Stay updated"));
        assert_eq!(new.concerns, None);
    }
}
