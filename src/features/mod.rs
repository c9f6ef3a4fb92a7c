pub mod contact;
pub mod get_involved;
pub mod health;
pub mod notifications;
