/// Discussion, response, and user ids are PostgreSQL BIGSERIAL / BIGINT.
pub type DbId = i64;

/// All timestamps are UTC (`TIMESTAMPTZ`).
pub type Timestamp = chrono::DateTime<chrono::Utc>;
