use serde::{Deserialize, Serialize};

use crate::errors::ExtractionError;
use crate::models::{EconomicsInfo, PassengerInfo};
use crate::profile::UserProfile;

/// Named output schemas the extractor can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSchema {
    Profile,
    Passengers,
    Economics,
    PostalCode,
}

impl ExtractionSchema {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtractionSchema::Profile => "profile",
            ExtractionSchema::Passengers => "passengers",
            ExtractionSchema::Economics => "economics",
            ExtractionSchema::PostalCode => "postal_code",
        }
    }
}

/// Structured object returned for a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema", content = "data", rename_all = "snake_case")]
pub enum Fragment {
    Profile(UserProfile),
    Passengers(PassengerInfo),
    Economics(EconomicsInfo),
    PostalCode(String),
}

impl Fragment {
    pub fn schema(&self) -> ExtractionSchema {
        match self {
            Fragment::Profile(_) => ExtractionSchema::Profile,
            Fragment::Passengers(_) => ExtractionSchema::Passengers,
            Fragment::Economics(_) => ExtractionSchema::Economics,
            Fragment::PostalCode(_) => ExtractionSchema::PostalCode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// System instruction plus the message window the extractor reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionContext {
    pub system_instruction: String,
    pub messages: Vec<ChatMessage>,
}

/// Structured extraction port. Implementations never retry; the calling
/// conversational layer owns retry and backoff.
pub trait IProfileExtractor: Send + Sync {
    fn extract(
        &self,
        schema: ExtractionSchema,
        context: &ExtractionContext,
    ) -> Result<Fragment, ExtractionError>;
}
