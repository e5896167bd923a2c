mod json_config;
mod path;
mod response;

pub use json_config::{custom_json_config, json_body, JsonBody};
pub use path::parse_entity_id;
pub use response::{ApiError, ApiResponse};
