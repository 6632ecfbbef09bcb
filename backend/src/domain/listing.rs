//! Display order for the blog list.

use super::Blog;

/// Order blogs for display: most liked first, earlier insertions first among
/// equal like counts.
///
/// The result depends only on each blog's `likes` and `sequence`, never on
/// the input order, so a blog moves only when its like count changes
/// relative to its neighbours.
///
/// # Examples
/// ```
/// use bloglist::domain::order_for;
///
/// assert!(order_for(Vec::new()).is_empty());
/// ```
pub fn order_for(mut blogs: Vec<Blog>) -> Vec<Blog> {
    blogs.sort_by(|a, b| {
        b.likes()
            .cmp(&a.likes())
            .then_with(|| a.sequence().cmp(&b.sequence()))
    });
    blogs
}
