use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use crate::domain::value_objects::{ShortText, WebUrl};

/// Card aggregate root
///
/// A picture posted by a user that other users can like.
///
/// # Invariants
/// - Name is 2 to 30 characters, link is an http(s) URL (enforced by value objects)
/// - A user appears at most once in `likes`
/// - `likes` keeps the order in which users liked the card
///
/// # Example
/// ```
/// use around_api::domain::card::Card;
/// use around_api::domain::value_objects::{ShortText, WebUrl};
/// use uuid::Uuid;
///
/// let owner = Uuid::new_v4();
/// let mut card = Card::new(
///     ShortText::new("name", "Yosemite Valley").unwrap(),
///     WebUrl::new("link", "https://example.com/yosemite.jpg").unwrap(),
///     owner,
/// );
///
/// assert!(card.like(owner));
/// assert!(!card.like(owner));
/// assert_eq!(card.likes(), &[owner]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    id: Uuid,
    name: String,
    link: String,
    owner: Uuid,
    likes: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new card owned by `owner`, with no likes
    pub fn new(name: ShortText, link: WebUrl, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into_inner(),
            link: link.into_inner(),
            owner,
            likes: Vec::new(),
            // microseconds, as Postgres stores them
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// Adds a like from `user_id`
    ///
    /// Returns `false` when the user had already liked the card.
    pub fn like(&mut self, user_id: Uuid) -> bool {
        if self.is_liked_by(user_id) {
            return false;
        }
        self.likes.push(user_id);
        true
    }

    /// Removes the like from `user_id`
    ///
    /// Returns `false` when the user had not liked the card.
    pub fn unlike(&mut self, user_id: Uuid) -> bool {
        let before = self.likes.len();
        self.likes.retain(|id| *id != user_id);
        self.likes.len() != before
    }

    /// Returns true if `user_id` has liked the card
    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.contains(&user_id)
    }

    /// Returns true if `user_id` created the card
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner == user_id
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn likes(&self) -> &[Uuid] {
        &self.likes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Card from persistence layer data
    ///
    /// Bypasses validation since the data was validated before it was stored.
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        link: String,
        owner: Uuid,
        likes: Vec<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            link,
            owner,
            likes,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(owner: Uuid) -> Card {
        Card::new(
            ShortText::new("name", "Lake Louise").unwrap(),
            WebUrl::new("link", "https://example.com/lake.jpg").unwrap(),
            owner,
        )
    }

    #[test]
    fn new_card_has_no_likes() {
        let owner = Uuid::new_v4();
        let card = card(owner);

        assert_eq!(card.name(), "Lake Louise");
        assert_eq!(card.link(), "https://example.com/lake.jpg");
        assert_eq!(card.owner(), owner);
        assert!(card.likes().is_empty());
        assert!(card.is_owned_by(owner));
        assert!(!card.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn created_at_has_microsecond_precision() {
        let card = card(Uuid::new_v4());
        assert_eq!(card.created_at().timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn like_is_idempotent() {
        let mut card = card(Uuid::new_v4());
        let fan = Uuid::new_v4();

        assert!(card.like(fan));
        assert!(!card.like(fan));
        assert_eq!(card.likes(), &[fan]);
    }

    #[test]
    fn likes_keep_insertion_order() {
        let mut card = card(Uuid::new_v4());
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        card.like(first);
        card.like(second);

        assert_eq!(card.likes(), &[first, second]);
    }

    #[test]
    fn unlike_removes_only_that_user() {
        let mut card = card(Uuid::new_v4());
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        card.like(first);
        card.like(second);

        assert!(card.unlike(first));
        assert!(!card.unlike(first));
        assert_eq!(card.likes(), &[second]);
    }

    #[test]
    fn from_persistence_round_trips_fields() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let created_at = Utc::now();

        let card = Card::from_persistence(
            id,
            "Bald Mountains".to_string(),
            "https://example.com/bald.jpg".to_string(),
            owner,
            vec![owner],
            created_at,
        );

        assert_eq!(card.id(), id);
        assert_eq!(card.created_at(), created_at);
        assert!(card.is_liked_by(owner));
    }
}
