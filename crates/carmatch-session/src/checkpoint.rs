//! Conversation checkpoints, stored as serialized snapshots.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use carmatch_core::errors::{CarmatchError, CarmatchResult};

use crate::conversation::Conversation;
use crate::ids::ConversationId;

/// One saved snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub conversation_id: ConversationId,
    pub saved_at: DateTime<Utc>,
    /// JSON-encoded [`Conversation`].
    pub state: String,
}

impl Checkpoint {
    pub fn capture(conversation: &Conversation) -> CarmatchResult<Self> {
        Ok(Self {
            conversation_id: conversation.id,
            saved_at: Utc::now(),
            state: serde_json::to_string(conversation)?,
        })
    }

    pub fn restore(&self) -> CarmatchResult<Conversation> {
        let conversation: Conversation = serde_json::from_str(&self.state)?;
        if conversation.id != self.conversation_id {
            return Err(CarmatchError::CheckpointFailed {
                reason: format!(
                    "checkpoint for {} holds conversation {}",
                    self.conversation_id, conversation.id
                ),
            });
        }
        Ok(conversation)
    }
}

/// Persists conversation snapshots keyed by conversation id.
pub trait ICheckpointStore: Send + Sync {
    /// Save (or replace) the snapshot of `conversation`.
    fn save(&self, conversation: &Conversation) -> CarmatchResult<()>;

    fn load(&self, id: &ConversationId) -> CarmatchResult<Option<Conversation>>;

    /// Returns whether a snapshot existed.
    fn delete(&self, id: &ConversationId) -> CarmatchResult<bool>;
}

/// Process-local checkpoint store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCheckpointStore {
    checkpoints: Arc<DashMap<ConversationId, Checkpoint>>,
}

impl InMemoryCheckpointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn ids(&self) -> Vec<ConversationId> {
        self.checkpoints.iter().map(|r| *r.key()).collect()
    }

    /// Raw snapshot, without decoding it.
    pub fn checkpoint(&self, id: &ConversationId) -> Option<Checkpoint> {
        self.checkpoints.get(id).map(|r| r.clone())
    }

    /// Drop snapshots saved more than `max_age` before `now`.
    pub fn evict_older_than(&self, max_age: Duration, now: DateTime<Utc>) -> usize {
        let before = self.checkpoints.len();
        self.checkpoints
            .retain(|_, checkpoint| now.signed_duration_since(checkpoint.saved_at) <= max_age);
        let removed = before.saturating_sub(self.checkpoints.len());
        if removed > 0 {
            info!(removed, "stale checkpoints evicted");
        }
        removed
    }
}

impl ICheckpointStore for InMemoryCheckpointStore {
    fn save(&self, conversation: &Conversation) -> CarmatchResult<()> {
        let checkpoint = Checkpoint::capture(conversation)?;
        debug!(conversation = %conversation.id, bytes = checkpoint.state.len(), "checkpoint saved");
        self.checkpoints.insert(conversation.id, checkpoint);
        Ok(())
    }

    fn load(&self, id: &ConversationId) -> CarmatchResult<Option<Conversation>> {
        // Clone out of the map so no shard lock is held while decoding.
        let Some(checkpoint) = self.checkpoint(id) else {
            return Ok(None);
        };
        checkpoint.restore().map(Some)
    }

    fn delete(&self, id: &ConversationId) -> CarmatchResult<bool> {
        Ok(self.checkpoints.remove(id).is_some())
    }
}
