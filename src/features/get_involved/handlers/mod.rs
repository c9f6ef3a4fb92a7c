pub mod get_involved_handler;

pub use get_involved_handler::*;
