use chrono::DateTime;
use uuid::Uuid;

use crate::error::AppError;

// Form encoders send every field, so an empty string counts as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn require_i64(name: &'static str, value: Option<&str>) -> Result<i64, AppError> {
    let raw = present(value).ok_or(AppError::MissingParam(name))?;
    raw.parse().map_err(|_| AppError::BadParam(name))
}

pub fn optional_i64(name: &'static str, value: Option<&str>) -> Result<Option<i64>, AppError> {
    match present(value) {
        Some(raw) => raw.parse().map(Some).map_err(|_| AppError::BadParam(name)),
        None => Ok(None),
    }
}

/// List size parameter: absent falls back to `default`, negatives are
/// malformed.
pub fn count_or(name: &'static str, value: Option<&str>, default: i64) -> Result<i64, AppError> {
    let count = optional_i64(name, value)?.unwrap_or(default);
    if count < 0 {
        return Err(AppError::BadParam(name));
    }
    Ok(count)
}

pub fn flag(name: &'static str, value: Option<&str>) -> Result<bool, AppError> {
    match present(value) {
        Some("true" | "1") => Ok(true),
        Some("false" | "0") => Ok(false),
        Some(_) => Err(AppError::BadParam(name)),
        None => Ok(false),
    }
}

pub fn require_uuid(name: &'static str, value: Option<&str>) -> Result<Uuid, AppError> {
    let raw = present(value).ok_or(AppError::MissingParam(name))?;
    Uuid::parse_str(raw).map_err(|_| AppError::BadParam(name))
}

pub fn optional_uuid(name: &'static str, value: Option<&str>) -> Result<Option<Uuid>, AppError> {
    match present(value) {
        Some(raw) => Uuid::parse_str(raw)
            .map(Some)
            .map_err(|_| AppError::BadParam(name)),
        None => Ok(None),
    }
}

/// RFC 3339 date-time, reduced to unix seconds.
pub fn require_expiry(name: &'static str, value: Option<&str>) -> Result<i64, AppError> {
    let raw = present(value).ok_or(AppError::MissingParam(name))?;
    let parsed = DateTime::parse_from_rfc3339(raw).map_err(|_| AppError::BadParam(name))?;
    Ok(parsed.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_i64_rejects_absent_and_garbage() {
        assert_eq!(require_i64("id", Some("42")).unwrap(), 42);
        assert_eq!(require_i64("id", Some("-7")).unwrap(), -7);
        assert!(matches!(
            require_i64("id", None),
            Err(AppError::MissingParam("id"))
        ));
        assert!(matches!(
            require_i64("id", Some("")),
            Err(AppError::MissingParam("id"))
        ));
        assert!(matches!(
            require_i64("id", Some("abc")),
            Err(AppError::BadParam("id"))
        ));
    }

    #[test]
    fn optional_i64_treats_empty_as_absent() {
        assert_eq!(optional_i64("category", None).unwrap(), None);
        assert_eq!(optional_i64("category", Some("")).unwrap(), None);
        assert_eq!(optional_i64("category", Some("3")).unwrap(), Some(3));
        assert!(optional_i64("category", Some("3.5")).is_err());
    }

    #[test]
    fn count_or_defaults_and_rejects_negatives() {
        assert_eq!(count_or("count", None, 50).unwrap(), 50);
        assert_eq!(count_or("count", Some("0"), 50).unwrap(), 0);
        assert_eq!(count_or("count", Some("12"), 50).unwrap(), 12);
        assert!(matches!(
            count_or("count", Some("-1"), 50),
            Err(AppError::BadParam("count"))
        ));
    }

    #[test]
    fn flag_accepts_both_spellings() {
        assert!(flag("showInMenu", Some("true")).unwrap());
        assert!(flag("showInMenu", Some("1")).unwrap());
        assert!(!flag("showInMenu", Some("false")).unwrap());
        assert!(!flag("showInMenu", Some("0")).unwrap());
        assert!(!flag("showInMenu", None).unwrap());
        assert!(!flag("showInMenu", Some("")).unwrap());
        assert!(flag("showInMenu", Some("yes")).is_err());
    }

    #[test]
    fn uuids_must_parse() {
        let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        assert_eq!(require_uuid("id", Some(id)).unwrap().to_string(), id);
        assert!(matches!(
            require_uuid("id", None),
            Err(AppError::MissingParam("id"))
        ));
        assert!(require_uuid("id", Some("not-a-uuid")).is_err());
        assert_eq!(optional_uuid("id", Some("")).unwrap(), None);
    }

    #[test]
    fn expiry_parses_rfc3339_with_offsets() {
        assert_eq!(
            require_expiry("expiry", Some("2026-01-01T00:00:00Z")).unwrap(),
            1_767_225_600
        );
        assert_eq!(
            require_expiry("expiry", Some("2026-01-01T10:00:00+10:00")).unwrap(),
            1_767_225_600
        );
        assert!(matches!(
            require_expiry("expiry", Some("next tuesday")),
            Err(AppError::BadParam("expiry"))
        ));
        assert!(matches!(
            require_expiry("expiry", None),
            Err(AppError::MissingParam("expiry"))
        ));
    }
}
