//! Blog entries shared by registered users.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Identity, UserId, Username};

/// Maximum length, in characters, of each free-text blog field.
pub const TEXT_FIELD_MAX: usize = 512;

/// Validation errors raised by blog constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogValidationError {
    /// The id is not a canonical UUID.
    #[error("blog id must be a valid UUID")]
    InvalidId,
    /// A required field is empty once trimmed.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Offending payload field.
        field: &'static str,
    },
    /// A field exceeds [`TEXT_FIELD_MAX`] characters.
    #[error("{field} must be at most {max} characters")]
    FieldTooLong {
        /// Offending payload field.
        field: &'static str,
        /// Allowed maximum.
        max: usize,
    },
}

impl BlogValidationError {
    /// Name of the offending payload field, when one applies.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::EmptyField { field } | Self::FieldTooLong { field, .. } => *field,
        }
    }
}

/// Stable blog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Generate a new random [`BlogId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a [`BlogId`] from its canonical string form.
    pub fn parse(raw: &str) -> Result<Self, BlogValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| BlogValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated content of a blog submission.
///
/// ## Invariants
/// - `title` and `url` are non-empty once trimmed.
/// - `author` may be empty (anonymous posts).
/// - No field exceeds [`TEXT_FIELD_MAX`] characters.
/// - All fields are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    author: String,
    title: String,
    url: String,
}

impl BlogDraft {
    /// Validate raw blog fields.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::BlogDraft;
    ///
    /// let draft = BlogDraft::try_from_parts("Wes Bos", "Javascript and magic", "wesbos.com/jsandmagic")
    ///     .expect("valid draft");
    /// assert_eq!(draft.title(), "Javascript and magic");
    /// assert!(BlogDraft::try_from_parts("Wes Bos", " ", "wesbos.com").is_err());
    /// ```
    pub fn try_from_parts(author: &str, title: &str, url: &str) -> Result<Self, BlogValidationError> {
        Ok(Self {
            author: bounded("author", author, false)?,
            title: bounded("title", title, true)?,
            url: bounded("url", url, true)?,
        })
    }

    /// Author credited by the submitter.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Blog title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Link to the blog.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

fn bounded(field: &'static str, raw: &str, required: bool) -> Result<String, BlogValidationError> {
    let trimmed = raw.trim();
    if required && trimmed.is_empty() {
        return Err(BlogValidationError::EmptyField { field });
    }
    if trimmed.chars().count() > TEXT_FIELD_MAX {
        return Err(BlogValidationError::FieldTooLong {
            field,
            max: TEXT_FIELD_MAX,
        });
    }
    Ok(trimmed.to_owned())
}

/// Blog entry as stored and listed.
///
/// ## Invariants
/// - `creator_id` and `creator_username` are fixed at creation; ownership is
///   decided by `creator_id` alone.
/// - `likes` starts at zero and only grows.
/// - `sequence` is stamped by the store on insert, is unique per store and
///   increases with insertion order; it is the listing tie-break and is not
///   serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    id: BlogId,
    author: String,
    title: String,
    url: String,
    likes: u64,
    creator_id: UserId,
    creator_username: Username,
    created_at: DateTime<Utc>,
    #[serde(skip)]
    sequence: u64,
}

impl Blog {
    /// Build a fresh blog with zero likes, owned by `creator`.
    ///
    /// The insertion-order marker is left at zero until the store assigns one.
    pub fn create(
        id: BlogId,
        draft: BlogDraft,
        creator: &Identity,
        created_at: DateTime<Utc>,
    ) -> Self {
        let BlogDraft { author, title, url } = draft;
        Self {
            id,
            author,
            title,
            url,
            likes: 0,
            creator_id: creator.user_id().clone(),
            creator_username: creator.username().clone(),
            created_at,
            sequence: 0,
        }
    }

    /// Stamp the insertion-order marker.
    #[must_use]
    pub(crate) fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> BlogId {
        self.id
    }

    /// Author credited by the submitter.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Blog title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Link to the blog.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Number of likes received.
    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// Account that created the blog.
    pub fn creator_id(&self) -> &UserId {
        &self.creator_id
    }

    /// Username of the account that created the blog.
    pub fn creator_username(&self) -> &Username {
        &self.creator_username
    }

    /// Wall-clock creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Insertion-order marker.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Record one more like.
    pub(crate) fn add_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::UserId;
    use chrono::TimeZone;
    use rstest::rstest;

    fn creator() -> Identity {
        Identity::new(UserId::random(), Username::new("test").expect("valid username"))
    }

    #[rstest]
    #[case("Wes Bos", "", "wesbos.com", BlogValidationError::EmptyField { field: "title" })]
    #[case("Wes Bos", "Title", "   ", BlogValidationError::EmptyField { field: "url" })]
    fn drafts_require_title_and_url(
        #[case] author: &str,
        #[case] title: &str,
        #[case] url: &str,
        #[case] expected: BlogValidationError,
    ) {
        let err = BlogDraft::try_from_parts(author, title, url).expect_err("invalid draft");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn drafts_reject_oversized_fields() {
        let long = "x".repeat(TEXT_FIELD_MAX + 1);
        let err = BlogDraft::try_from_parts(&long, "Title", "url").expect_err("too long");
        assert_eq!(err.field(), "author");
        assert!(BlogDraft::try_from_parts("", &"t".repeat(TEXT_FIELD_MAX), "url").is_ok());
    }

    #[rstest]
    fn drafts_allow_anonymous_author_and_trim() {
        let draft = BlogDraft::try_from_parts("  ", " Title ", " url ").expect("valid draft");
        assert_eq!(draft.author(), "");
        assert_eq!(draft.title(), "Title");
        assert_eq!(draft.url(), "url");
    }

    #[rstest]
    fn created_blog_starts_without_likes() {
        let draft = BlogDraft::try_from_parts("Wes Bos", "Javascript and magic", "wesbos.com/jsandmagic")
            .expect("valid draft");
        let owner = creator();
        let mut blog = Blog::create(
            BlogId::random(),
            draft,
            &owner,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid timestamp"),
        );
        assert_eq!(blog.likes(), 0);
        assert_eq!(blog.sequence(), 0);
        assert_eq!(blog.creator_id(), owner.user_id());
        assert_eq!(blog.creator_username().as_ref(), "test");
        assert_eq!(blog.clone().with_sequence(4).sequence(), 4);

        blog.add_like();
        blog.add_like();
        assert_eq!(blog.likes(), 2);
    }

    #[rstest]
    fn serialises_camel_case_without_sequence() {
        let draft = BlogDraft::try_from_parts("Wes Bos", "Javascript and magic", "wesbos.com/jsandmagic")
            .expect("valid draft");
        let owner = creator();
        let blog = Blog::create(
            BlogId::random(),
            draft,
            &owner,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid timestamp"),
        )
        .with_sequence(9);
        let value = serde_json::to_value(&blog).expect("serialise blog");
        assert_eq!(value["creatorUsername"], "test");
        assert_eq!(value["creatorId"], owner.user_id().as_ref());
        assert_eq!(value["likes"], 0);
        assert_eq!(value["createdAt"], "2024-05-01T12:00:00Z");
        assert!(value.get("sequence").is_none());
    }

    #[rstest]
    fn blog_ids_parse_canonical_uuids() {
        let id = BlogId::random();
        assert_eq!(BlogId::parse(&id.to_string()), Ok(id));
        assert_eq!(BlogId::parse("42"), Err(BlogValidationError::InvalidId));
    }
}
