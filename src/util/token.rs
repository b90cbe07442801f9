//! Structural bearer-token inspection.
//!
//! Decodes the middle segment of a `header.payload.signature` token as
//! base64url JSON and reads its timing claims. The signature is NOT checked:
//! nothing here is a trust boundary, it only lets the client drop sessions
//! that are obviously stale before asking the server.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Claims decoded from a token payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenClaims {
    /// `exp`: expiry as whole Unix seconds (fractions floored), when present.
    pub expiry: Option<i64>,
}

/// Decode the claims of a structurally well-formed token.
///
/// Returns `None` unless the token has exactly three dot-separated segments
/// and the middle one decodes to a JSON object whose `exp`, if present, is a
/// finite number. Other claims are not inspected.
#[must_use]
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };

    let bytes = decode_segment(payload)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let object = value.as_object()?;

    Some(TokenClaims { expiry: numeric_date(object, "exp")? })
}

/// Expiry check against an explicit clock.
///
/// Malformed tokens count as expired. A well-formed payload without `exp`
/// never expires. A token whose `exp` equals `now` is still valid.
#[must_use]
pub fn is_expired_at(token: &str, now_secs: i64) -> bool {
    match decode_claims(token) {
        Some(TokenClaims { expiry: Some(exp), .. }) => now_secs > exp,
        Some(TokenClaims { expiry: None, .. }) => false,
        None => true,
    }
}

/// Expiry check against the current wall clock.
#[must_use]
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_unix_secs())
}

/// Current time in whole Unix seconds.
#[must_use]
#[cfg_attr(feature = "hydrate", allow(clippy::cast_possible_truncation))]
pub fn now_unix_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0).floor() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Base64url decode, tolerating padding and the standard alphabet.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD.decode(normalized).ok()
}

/// `Some(None)` when absent or null, `Some(Some(secs))` for a finite number,
/// `None` for any other type.
///
/// Flooring a fractional date keeps `now > exp` exact for whole-second `now`.
#[allow(clippy::cast_possible_truncation)]
fn numeric_date(object: &serde_json::Map<String, serde_json::Value>, key: &str) -> Option<Option<i64>> {
    match object.get(key) {
        None | Some(serde_json::Value::Null) => Some(None),
        Some(value) => value
            .as_i64()
            .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f.floor() as i64))
            .map(Some),
    }
}
