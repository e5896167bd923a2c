pub mod api;
pub mod fields;
