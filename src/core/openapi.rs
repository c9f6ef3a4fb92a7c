use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::get_involved::{dtos as get_involved_dtos, handlers as get_involved_handlers};
use crate::features::health::handler as health_handler;
use crate::shared::types::{ErrorResponse, SubmissionResponseDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Contact (public)
        contact_handlers::create_contact,
        // Get involved (public)
        get_involved_handlers::create_get_involved,
        // Health
        health_handler::health_check,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            SubmissionResponseDto,
            // Contact
            contact_dtos::CreateContactDto,
            // Get involved
            get_involved_dtos::CreateGetInvolvedDto,
            // Health
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "contact", description = "Contact form submissions (public)"),
        (name = "get-involved", description = "Get involved sign-ups (public)"),
        (name = "health", description = "Liveness check"),
    ),
    info(
        title = "Weingart Workers Union Backend",
        version = "0.1.0",
        description = "API for contact + get involved forms.",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
