use serde::Serialize;

/// A stored text snippet.
///
/// Both fields are fixed at creation. The same shape is used as the JSON
/// response body for create, replay and search.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TextRecord {
    /// UUID v4 string, unique for the lifetime of the process.
    pub id: String,
    /// The submitted text, exactly as received.
    pub text: String,
}

impl TextRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
        }
    }
}

/// Response body for the stats endpoint.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub records: usize,
    pub idempotency_keys: usize,
}
