mod get_involved_service;

pub use get_involved_service::GetInvolvedService;
