pub mod errors;
pub mod id;

pub use errors::{AbsentCredential, ChatbotError, ConfigError};
pub use id::{new_id, SessionId};
