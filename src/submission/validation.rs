use crate::error::{MAX_TEXT_LENGTH, Result, TextError};
use axum::http::HeaderValue;

/// Checks a submitted text against the storage policy.
///
/// Emptiness is checked on the trimmed text, length on the untrimmed text,
/// counted in characters rather than bytes.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(TextError::EmptyText);
    }
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(TextError::TooLong {
            max: MAX_TEXT_LENGTH,
        });
    }
    Ok(())
}

/// Extracts the idempotency key from its header value.
///
/// A missing or empty header means "no key".
pub fn parse_idempotency_key(value: Option<&HeaderValue>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let key = value
        .to_str()
        .map_err(|_| TextError::InvalidIdempotencyKey)?;
    if key.is_empty() {
        return Ok(None);
    }
    Ok(Some(key.to_string()))
}
