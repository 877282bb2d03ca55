// Password hashing utilities
// Uses bcrypt; the cost factor comes from configuration

pub use bcrypt::DEFAULT_COST;

/// Hashes a password using bcrypt
///
/// # Arguments
/// * `password` - The plaintext password to hash
/// * `cost` - bcrypt cost factor (4..=31)
///
/// # Example
/// ```
/// use around_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password", 4).expect("valid hash");
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &str, cost: u32) -> Result<String, String> {
    bcrypt::hash(password, cost).map_err(|e| e.to_string())
}

/// Verifies a password against a bcrypt hash
///
/// # Returns
/// * `Ok(bool)` - True if password matches, false otherwise
/// * `Err(String)` - If the stored hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    bcrypt::verify(password, hash).map_err(|e| e.to_string())
}
