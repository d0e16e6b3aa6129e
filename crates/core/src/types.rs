/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A static widget payload: an arbitrary JSON object rendered as-is.
pub type StaticContent = serde_json::Map<String, serde_json::Value>;
