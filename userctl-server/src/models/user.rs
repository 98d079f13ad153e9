//! User record and creation input
//!
//! `NewUser` can only be built from input that carries both a name and an
//! email, so the insert path never sees a half-filled record.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::ValidationError;

/// Database-assigned user identifier (`SERIAL`)
pub type UserId = i32;

/// User record as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Build creation input from optional request fields.
    ///
    /// Absent and empty values are rejected; `name` is checked first.
    ///
    /// # Example
    /// ```
    /// use userctl_server::models::NewUser;
    ///
    /// assert!(NewUser::new(Some("Ana".into()), Some("ana@x.com".into())).is_ok());
    /// assert!(NewUser::new(None, Some("ana@x.com".into())).is_err());
    /// assert!(NewUser::new(Some("Ana".into()), Some(String::new())).is_err());
    /// ```
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, ValidationError> {
        let name = required(name, "name")?;
        let email = required(email, "email")?;
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Required { field }),
    }
}

/// Parse a user id taken from a request path.
///
/// The segment is read as a number, so `"7"`, `"7.0"` and `"7e0"` all name
/// user 7. Returns `None` for non-numeric, fractional or out-of-range input;
/// callers treat that as an id that matches no row.
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    let n: f64 = raw.trim().parse().ok()?;
    let in_range = n >= f64::from(UserId::MIN) && n <= f64::from(UserId::MAX);
    if n.is_finite() && n.fract() == 0.0 && in_range {
        Some(n as UserId)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_name_and_email() {
        let user = NewUser::new(Some("Ana".into()), Some("ana@x.com".into())).unwrap();
        assert_eq!(user.name(), "Ana");
        assert_eq!(user.email(), "ana@x.com");
    }

    #[test]
    fn rejects_missing_name() {
        let err = NewUser::new(None, Some("ana@x.com".into())).unwrap_err();
        assert!(matches!(err, ValidationError::Required { field: "name" }));
    }

    #[test]
    fn rejects_empty_email() {
        let err = NewUser::new(Some("Ana".into()), Some(String::new())).unwrap_err();
        assert!(matches!(err, ValidationError::Required { field: "email" }));
    }

    #[test]
    fn name_checked_before_email() {
        let err = NewUser::new(None, None).unwrap_err();
        assert!(matches!(err, ValidationError::Required { field: "name" }));
    }

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_user_id("42"), Some(42));
        assert_eq!(parse_user_id(" 7 "), Some(7));
        assert_eq!(parse_user_id("-3"), Some(-3));
    }

    #[test]
    fn integral_decimals_coerce_to_ids() {
        assert_eq!(parse_user_id("1.0"), Some(1));
        assert_eq!(parse_user_id("1e2"), Some(100));
        assert_eq!(parse_user_id("+5"), Some(5));
        assert_eq!(parse_user_id("2147483647"), Some(i32::MAX));
    }

    #[test]
    fn non_numeric_ids_match_nothing() {
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id("1.5"), None);
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("NaN"), None);
        assert_eq!(parse_user_id("inf"), None);
        // Out of range for SERIAL
        assert_eq!(parse_user_id("99999999999"), None);
        assert_eq!(parse_user_id("2147483648"), None);
    }
}
