mod create_contact_message;
mod delete_contact_message;
mod get_contact_messages;

pub use create_contact_message::{CreateContactMessageError, CreateContactMessageUseCase};
pub use delete_contact_message::{DeleteContactMessageError, DeleteContactMessageUseCase};
pub use get_contact_messages::{GetContactMessagesError, GetContactMessagesUseCase};
