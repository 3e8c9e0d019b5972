//! QR scan payload parsing.
//!
//! Three payload formats have shipped on printed QR codes over time and all
//! of them must keep scanning:
//!
//! - `https://host/anything/verify/{store_identifier}`
//! - `https://host/{store_identifier}` (bare path)
//! - `store:{store_identifier}` (explicit scheme)

use super::StoreKey;

/// Extracts the store identifier from a scanned QR payload.
///
/// Returns `None` for payloads that fit none of the historical formats or
/// that carry an empty identifier.
pub fn parse_scan_payload(payload: &str) -> Option<StoreKey> {
    let payload = payload.trim();
    if payload.is_empty() {
        return None;
    }

    if let Some(rest) = payload.strip_prefix("store:") {
        return non_empty(rest).map(|id| StoreKey::parse(id));
    }

    if let Some((_, id)) = payload.rsplit_once("/verify/") {
        return non_empty(id).map(StoreKey::parse);
    }

    // Bare landing-page URL: the identifier is the single path segment.
    if let Some(rest) = payload
        .strip_prefix("https://")
        .or_else(|| payload.strip_prefix("http://"))
    {
        let (_, path) = rest.split_once('/')?;
        if path.contains('/') {
            return None;
        }
        return non_empty(path).map(StoreKey::parse);
    }

    None
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_path_suffix_is_accepted() {
        assert_eq!(
            parse_scan_payload("https://qoupon.app/pos/verify/shop1-counter"),
            Some(StoreKey::Slug("shop1-counter".to_string()))
        );
    }

    #[test]
    fn bare_host_path_is_accepted() {
        assert_eq!(
            parse_scan_payload("https://qoupon.app/shop1-counter"),
            Some(StoreKey::Slug("shop1-counter".to_string()))
        );
    }

    #[test]
    fn store_scheme_is_accepted() {
        assert_eq!(
            parse_scan_payload("store:t123"),
            Some(StoreKey::TempId("t123".to_string()))
        );
    }

    #[test]
    fn nested_bare_paths_are_rejected() {
        assert_eq!(parse_scan_payload("https://qoupon.app/a/b"), None);
    }

    #[test]
    fn garbage_and_empty_payloads_are_rejected() {
        assert_eq!(parse_scan_payload(""), None);
        assert_eq!(parse_scan_payload("hello world"), None);
        assert_eq!(parse_scan_payload("store:"), None);
        assert_eq!(parse_scan_payload("https://qoupon.app/pos/verify/"), None);
    }
}
