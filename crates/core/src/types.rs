/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Ids that can never resolve to a stored row (BIGSERIAL starts at 1).
///
/// Lets callers answer "not found" for `0` or negative ids without a query.
pub fn is_unassigned_id(id: DbId) -> bool {
    id <= 0
}
