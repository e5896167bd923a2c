mod create_contact_message_service;
mod delete_contact_message_service;
mod get_contact_messages_service;

pub use create_contact_message_service::CreateContactMessageService;
pub use delete_contact_message_service::DeleteContactMessageService;
pub use get_contact_messages_service::GetContactMessagesService;
