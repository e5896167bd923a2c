// src/shared/api/path.rs
use uuid::Uuid;

/// Parses a generated entity id taken from the request path.
///
/// A malformed id can never match a stored record, so callers treat `None`
/// the same way as "no such record".
pub fn parse_entity_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
