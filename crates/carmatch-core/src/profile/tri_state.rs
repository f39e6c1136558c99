use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Three-valued yes/no answer.
///
/// `Unknown` means the question was never answered (or the answer could not
/// be read). On the wire the conversational layer sends booleans or Spanish
/// strings; both are accepted and anything unreadable becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl TriState {
    pub fn is_yes(self) -> bool {
        self == TriState::Yes
    }

    pub fn is_no(self) -> bool {
        self == TriState::No
    }

    /// Whether the question has been answered either way.
    pub fn is_known(self) -> bool {
        self != TriState::Unknown
    }

    /// Parse a free-form answer. Case-insensitive; accepts the accented form.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "sí" | "si" | "yes" | "true" => TriState::Yes,
            "no" | "false" => TriState::No,
            _ => TriState::Unknown,
        }
    }

    /// Wire representation: `"sí"`, `"no"`, or `None` when unanswered.
    pub fn as_wire(self) -> Option<&'static str> {
        match self {
            TriState::Yes => Some("sí"),
            TriState::No => Some("no"),
            TriState::Unknown => None,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::Yes
        } else {
            TriState::No
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map(TriState::from).unwrap_or_default()
    }
}

impl Serialize for TriState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_wire() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_none(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTriState {
    Bool(bool),
    Text(String),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for TriState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawTriState>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawTriState::Bool(b)) => TriState::from(b),
            Some(RawTriState::Text(s)) => TriState::parse(&s),
            Some(RawTriState::Other(_)) | None => TriState::Unknown,
        })
    }
}
