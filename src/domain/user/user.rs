use uuid::Uuid;

use super::value_objects::Email;
use crate::domain::value_objects::{ShortText, WebUrl};

/// Name given to users who sign up without one
pub const DEFAULT_NAME: &str = "Jacques Cousteau";

/// "About" line given to users who sign up without one
pub const DEFAULT_ABOUT: &str = "Explorer";

/// Avatar given to users who sign up without one
pub const DEFAULT_AVATAR: &str =
    "https://practicum-content.s3.us-west-1.amazonaws.com/resources/moved_avatar_1604080799.jpg";

/// User data for persistence
///
/// Simple struct for user CRUD operations. The password hash never leaves
/// the server: response types copy the public fields only.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub email: Email,
    pub password_hash: String,
}

/// Optional profile fields supplied at sign-up
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub name: Option<ShortText>,
    pub about: Option<ShortText>,
    pub avatar: Option<WebUrl>,
}

impl User {
    /// Builds a new user, filling missing profile fields with defaults
    ///
    /// # Example
    /// ```
    /// use around_api::domain::user::{Profile, User, DEFAULT_NAME};
    /// use around_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("jacques@example.com").unwrap();
    /// let user = User::register(email, "hash".to_string(), Profile::default());
    /// assert_eq!(user.name, DEFAULT_NAME);
    /// ```
    pub fn register(email: Email, password_hash: String, profile: Profile) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: profile
                .name
                .map(ShortText::into_inner)
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            about: profile
                .about
                .map(ShortText::into_inner)
                .unwrap_or_else(|| DEFAULT_ABOUT.to_string()),
            avatar: profile
                .avatar
                .map(WebUrl::into_inner)
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            email,
            password_hash,
        }
    }
}
