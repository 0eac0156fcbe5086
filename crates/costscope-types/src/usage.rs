use serde::{Deserialize, Serialize};

/// Pricing bucket for cache-read tokens.
///
/// Log records carry no tier signal today, so everything defaults to the
/// 5-minute tier; the 1-hour variant exists so real detection can slot in
/// if the format ever grows one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CacheTier {
    #[default]
    #[serde(rename = "5m")]
    FiveMinute,
    #[serde(rename = "1h")]
    OneHour,
}

/// Token counts for one message. All counts are non-negative; raw inputs
/// are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    pub input: u64,
    pub cache_write: u64,
    pub cache_read: u64,
    pub output: u64,
    #[serde(default)]
    pub tier: CacheTier,
}

impl TokenUsage {
    /// Build from raw counts as they appear on the wire; negative values
    /// clamp to zero rather than erroring.
    pub fn from_raw(input: i64, cache_write: i64, cache_read: i64, output: i64) -> Self {
        Self {
            input: clamp(input),
            cache_write: clamp(cache_write),
            cache_read: clamp(cache_read),
            output: clamp(output),
            tier: CacheTier::default(),
        }
    }

    /// Sum of all four token counts.
    pub fn total(&self) -> u64 {
        self.input + self.cache_write + self.cache_read + self.output
    }
}

fn clamp(count: i64) -> u64 {
    count.max(0) as u64
}
