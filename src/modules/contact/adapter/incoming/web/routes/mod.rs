mod contact_request;
mod create_contact_message;
mod delete_contact_message;
mod get_contact_messages;

pub use contact_request::ContactMessageRequest;
pub use create_contact_message::{create_contact_message_handler, __path_create_contact_message_handler};
pub use delete_contact_message::{delete_contact_message_handler, __path_delete_contact_message_handler};
pub use get_contact_messages::{get_contact_messages_handler, __path_get_contact_messages_handler};
