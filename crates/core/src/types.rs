/// Entity identifiers. Non-negative by declaration, not by type.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
