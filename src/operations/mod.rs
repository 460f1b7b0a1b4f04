pub mod query;
pub mod tagging;
pub mod walk;
