/// Prefix on every notification subject line
pub const EMAIL_SUBJECT_PREFIX: &str = "[WCA Union]";

/// Placeholder for optional fields in notification bodies
pub const NOT_PROVIDED: &str = "(not provided)";

pub const CONTACT_ACK_MESSAGE: &str = "Thanks for reaching out. An organizer will follow up.";

pub const GET_INVOLVED_ACK_MESSAGE: &str =
    "Thanks for signing up to be involved. An organizer will reach out.";
