//! Request rules checked before the collection is touched

use crate::error::{Result, ServiceError};

const ALLOWED_URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Reject a `url` that doesn't start with `http://` or `https://`.
///
/// A missing or empty url passes; whether it is required is decided by
/// the operation itself.
pub fn check_url(url: Option<&str>) -> Result<()> {
    match url {
        Some(url) if !url.is_empty() => {
            if ALLOWED_URL_SCHEMES
                .iter()
                .any(|scheme| url.starts_with(scheme))
            {
                Ok(())
            } else {
                Err(ServiceError::InvalidUrl)
            }
        }
        _ => Ok(()),
    }
}

/// Refuse a create only when neither `title` nor `url` was given.
///
/// Either one alone is enough. Empty strings count as missing.
pub fn check_required_fields(title: Option<&str>, url: Option<&str>) -> Result<()> {
    let present = |field: Option<&str>| field.is_some_and(|f| !f.is_empty());
    if !present(title) && !present(url) {
        return Err(ServiceError::MissingRequiredFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_url_accepts_http_and_https() {
        assert!(check_url(Some("http://example.com")).is_ok());
        assert!(check_url(Some("https://example.com")).is_ok());
    }

    #[test]
    fn test_check_url_rejects_other_schemes() {
        assert!(matches!(
            check_url(Some("ftp://example.com")),
            Err(ServiceError::InvalidUrl)
        ));
        assert!(matches!(
            check_url(Some("example.com")),
            Err(ServiceError::InvalidUrl)
        ));
        assert!(matches!(
            check_url(Some("HTTP://example.com")),
            Err(ServiceError::InvalidUrl)
        ));
    }

    #[test]
    fn test_check_url_skips_missing_or_empty() {
        assert!(check_url(None).is_ok());
        assert!(check_url(Some("")).is_ok());
    }

    #[test]
    fn test_required_fields_only_fail_when_both_missing() {
        assert!(check_required_fields(Some("t"), None).is_ok());
        assert!(check_required_fields(None, Some("http://x")).is_ok());
        assert!(matches!(
            check_required_fields(None, None),
            Err(ServiceError::MissingRequiredFields)
        ));
        assert!(matches!(
            check_required_fields(Some(""), Some("")),
            Err(ServiceError::MissingRequiredFields)
        ));
    }
}
