// Handlers module

pub mod chat;
pub mod news;
pub mod status;

pub use chat::{capabilities_handler, chat_handler, chat_response, search_handler};
pub use news::{categories_handler, categories_response, news_handler, news_response};
pub use status::{create_status_handler, list_status_handler, record_status, root_handler};
