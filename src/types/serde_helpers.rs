//! Serde helpers for the ME Frp wire format.
//!
//! The API omits optional query filters instead of sending zero values, and
//! reports times as unix seconds where `0` means "never".

use time::OffsetDateTime;

/// `skip_serializing_if` predicate for numeric filters: zero means "not set".
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use mefrp_api_client::types::serde_helpers::is_zero;
///
/// #[derive(Serialize)]
/// struct Query {
///     #[serde(skip_serializing_if = "is_zero")]
///     slot_id: i64,
/// }
///
/// assert_eq!(serde_urlencoded::to_string(Query { slot_id: 0 }).unwrap(), "");
/// assert_eq!(serde_urlencoded::to_string(Query { slot_id: 3 }).unwrap(), "slot_id=3");
/// ```
pub fn is_zero<T>(value: &T) -> bool
where
    T: Default + PartialEq,
{
    *value == T::default()
}

/// Convert a unix-seconds field to a timestamp, treating `0` and out-of-range
/// values as absent.
///
/// # Example
///
/// ```rust
/// use mefrp_api_client::types::serde_helpers::unix_seconds;
///
/// assert!(unix_seconds(0).is_none());
/// assert_eq!(unix_seconds(1_700_000_000).unwrap().year(), 2023);
/// ```
pub fn unix_seconds(secs: i64) -> Option<OffsetDateTime> {
    if secs <= 0 {
        return None;
    }
    OffsetDateTime::from_unix_timestamp(secs).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(&0_i64));
        assert!(is_zero(&0_i32));
        assert!(!is_zero(&-1_i64));
        assert!(is_zero(&String::new()));
    }

    #[test]
    fn test_unix_seconds() {
        assert!(unix_seconds(-5).is_none());
        let ts = unix_seconds(86_400).unwrap();
        assert_eq!(ts.unix_timestamp(), 86_400);
        assert!(unix_seconds(i64::MAX).is_none());
    }
}
