mod get_involved_submission;

pub use get_involved_submission::{GetInvolvedSubmission, NewGetInvolvedSubmission};
