pub mod get_involved_dto;

pub use get_involved_dto::CreateGetInvolvedDto;
