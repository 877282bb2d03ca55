use std::fmt;

/// Minimum password length accepted at sign-up
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Email value object representing a valid email address
///
/// # Invariants
/// - Must contain '@' character
/// - Must be at least 3 characters long
/// - Stored lowercase so lookups are case-insensitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use around_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("Jacques@Example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "jacques@example.com");
    /// ```
    pub fn new(email: impl AsRef<str>) -> Result<Self, String> {
        let email = email.as_ref().trim();
        if email.is_empty() {
            return Err("\"email\" is not allowed to be empty".to_string());
        }
        if !Self::is_valid(email) {
            return Err("\"email\" must be a valid email".to_string());
        }

        Ok(Email(email.to_lowercase()))
    }

    /// Validation Rules
    /// - Must contain '@' character
    /// - Must be at least 3 characters long
    fn is_valid(email: &str) -> bool {
        email.contains('@') && email.len() >= 3
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plaintext password as received from a client, checked before hashing
///
/// No `Display`; `Debug` is redacted.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    /// Password accepted at sign-in: only presence is checked
    pub fn for_sign_in(password: impl Into<String>) -> Result<Self, String> {
        let password = password.into();
        if password.is_empty() {
            return Err("\"password\" is not allowed to be empty".to_string());
        }
        Ok(Password(password))
    }

    /// Password accepted at sign-up: at least 8 characters
    pub fn for_sign_up(password: impl Into<String>) -> Result<Self, String> {
        let password = Self::for_sign_in(password)?;
        if password.0.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(format!(
                "\"password\" length must be at least {PASSWORD_MIN_LENGTH} characters long"
            ));
        }
        Ok(password)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        assert!(Email::new("test@example.com").is_ok());
    }

    #[test]
    fn valid_email_with_subdomain() {
        assert!(Email::new("user@mail.example.com").is_ok());
    }

    #[test]
    fn valid_email_minimum_length() {
        assert!(Email::new("a@b").is_ok());
    }

    #[test]
    fn email_is_lowercased_and_trimmed() {
        let email = Email::new("  Test@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "test@example.com");
    }

    #[test]
    fn invalid_email_no_at_symbol() {
        let err = Email::new("invalid").unwrap_err();
        assert_eq!(err, "\"email\" must be a valid email");
    }

    #[test]
    fn invalid_email_too_short() {
        assert!(Email::new("a@").is_err());
    }

    #[test]
    fn invalid_email_empty() {
        let err = Email::new("").unwrap_err();
        assert_eq!(err, "\"email\" is not allowed to be empty");
    }

    #[test]
    fn email_display() {
        let email = Email::new("test@example.com").unwrap();
        assert_eq!(format!("{}", email), "test@example.com");
    }

    #[test]
    fn sign_in_password_only_requires_presence() {
        assert!(Password::for_sign_in("x").is_ok());
        assert!(Password::for_sign_in("").is_err());
    }

    #[test]
    fn sign_up_password_minimum_length() {
        assert!(Password::for_sign_up("12345678").is_ok());
        let err = Password::for_sign_up("1234567").unwrap_err();
        assert_eq!(err, "\"password\" length must be at least 8 characters long");
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::for_sign_in("hunter22").unwrap();
        assert_eq!(format!("{:?}", password), "Password(***)");
    }
}
