//! Chat messages and their polymorphic content

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Message roles accepted in a chat request.
///
/// The set is closed: any other string fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Role of a generated message; only `"assistant"` is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssistantRole {
    #[default]
    #[serde(rename = "assistant")]
    Assistant,
}

impl From<AssistantRole> for Role {
    fn from(_: AssistantRole) -> Self {
        Role::Assistant
    }
}

/// One element of a structured content array.
///
/// Only `type` and `text` are known. Every other field (`image_url`,
/// `input_audio`, ...) lands in `extra` and is written back unchanged.
///
/// `text` keeps absent (`None`) apart from an explicit `null`
/// (`Some(None)`) so both re-encode as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentPart {
    /// Part type for plain text.
    pub const TEXT: &'static str = "text";

    /// A part with the given `type` and no other fields.
    pub fn new(part_type: impl Into<String>) -> Self {
        Self {
            part_type: part_type.into(),
            text: None,
            extra: Map::new(),
        }
    }

    /// A `{"type": "text", "text": ...}` part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(Some(text.into())),
            ..Self::new(Self::TEXT)
        }
    }

    /// Attach an additional field, e.g. `image_url`.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn is_text(&self) -> bool {
        self.part_type == Self::TEXT
    }

    /// The `text` field when it holds a string.
    pub fn as_text(&self) -> Option<&str> {
        self.text.as_ref().and_then(|text| text.as_deref())
    }
}

/// Only called for a key that is present, so `null` becomes `Some(None)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Message content: a plain string or an array of content parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Get the text content, joining text parts with newlines.
    ///
    /// Non-text parts contribute nothing.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Parts(parts) => parts
                .iter()
                .filter(|p| p.is_text())
                .filter_map(ContentPart::as_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Parts(parts) => parts.is_empty(),
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<ContentPart>> for MessageContent {
    fn from(parts: Vec<ContentPart>) -> Self {
        Self::Parts(parts)
    }
}

/// A single message of the conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<MessageContent>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, text.into())
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text.into())
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text.into())
    }

    /// A message whose content is a structured parts array.
    pub fn with_parts(role: Role, parts: Vec<ContentPart>) -> Self {
        Self::new(role, parts)
    }
}
