use super::ApiError;

/// Parses the `{id}` path segment. Only plain unsigned digits can name a
/// stored fighter; anything else, signs included, is reported as not found
/// rather than as a bad request.
pub fn parse_fighter_id(raw: &str) -> Result<i32, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::fighter_not_found(raw));
    }

    raw.parse::<i32>()
        .map_err(|_| ApiError::fighter_not_found(raw))
}
