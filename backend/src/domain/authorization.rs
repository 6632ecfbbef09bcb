//! Ownership rule for destructive blog operations.

use super::{Blog, Identity};

/// Whether `identity` may delete `blog`.
///
/// Only the creator may delete. Accounts are compared by id: a later account
/// that reuses the creator's username is a different account.
#[must_use]
pub fn can_delete(identity: &Identity, blog: &Blog) -> bool {
    identity.user_id() == blog.creator_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlogDraft, BlogId, UserId, Username};
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    fn identity(name: &str) -> Identity {
        Identity::new(UserId::random(), Username::new(name).expect("valid username"))
    }

    #[fixture]
    fn owner() -> Identity {
        identity("test")
    }

    fn blog_by(creator: &Identity) -> Blog {
        let draft = BlogDraft::try_from_parts("Wes Bos", "Javascript and magic", "wesbos.com/jsandmagic")
            .expect("valid draft");
        Blog::create(
            BlogId::random(),
            draft,
            creator,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid timestamp"),
        )
    }

    #[rstest]
    fn creator_may_delete(owner: Identity) {
        assert!(can_delete(&owner, &blog_by(&owner)));
    }

    #[rstest]
    #[case("test2")]
    #[case("tester")]
    #[case("TEST")]
    fn anyone_else_may_not(owner: Identity, #[case] other: &str) {
        assert!(!can_delete(&identity(other), &blog_by(&owner)));
    }

    #[rstest]
    fn reused_username_is_not_the_creator(owner: Identity) {
        let successor = identity("test");
        assert_eq!(successor.username(), owner.username());
        assert!(!can_delete(&successor, &blog_by(&owner)));
    }
}
