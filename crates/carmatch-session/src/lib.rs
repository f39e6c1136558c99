//! # carmatch-session
//!
//! Per-conversation state for the interview: merged answers, the next stage
//! to ask about, postal-code resolution through the climate port, and
//! checkpointing. Conversations share nothing with each other.

pub mod checkpoint;
pub mod conversation;
pub mod ids;
pub mod postal;
pub mod stage;
pub mod tracing_setup;

pub use checkpoint::{Checkpoint, ICheckpointStore, InMemoryCheckpointStore};
pub use conversation::Conversation;
pub use ids::ConversationId;
pub use postal::{is_valid_postal_code, resolve_climate};
pub use stage::Stage;
