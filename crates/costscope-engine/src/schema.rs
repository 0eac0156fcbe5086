use serde::Deserialize;
use serde_json::Value;

/// Raw shape of one log line as the assistant writes it. Everything except
/// the nested message id is optional on the wire; defaulting happens in the
/// parser, not here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRecord {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub is_sidechain: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub parent_uuid: Option<String>,
    #[serde(default)]
    pub message: Option<RawMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawMessage {
    /// Optional here so a missing id can be reported as a parse error
    /// rather than a deserialization failure.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub content: Option<RawContent>,
    #[serde(default)]
    pub usage: Option<RawUsage>,
}

/// Content arrives either as plain text or as an ordered list of typed
/// blocks; anything else is tolerated and treated as no content.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawContent {
    Text(String),
    Blocks(Vec<RawBlock>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub(crate) enum RawBlock {
    Text {
        #[serde(default)]
        text: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

/// Token counts are signed on purpose: malformed producers have emitted
/// negatives, which clamp to zero downstream.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawUsage {
    #[serde(default)]
    pub input_tokens: i64,
    #[serde(default)]
    pub cache_creation_input_tokens: i64,
    #[serde(default)]
    pub cache_read_input_tokens: i64,
    #[serde(default)]
    pub output_tokens: i64,
}
