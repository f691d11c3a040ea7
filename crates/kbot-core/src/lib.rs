pub mod config;
pub mod error;
pub mod event;
pub mod types;

pub use config::KbotConfig;
pub use error::{KbotError, Result};
pub use event::{ChannelAccount, EventKind, InboundEvent};
pub use types::{KnowledgeRecord, ResponsePayload};
