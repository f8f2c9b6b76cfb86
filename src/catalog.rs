use std::collections::HashMap;

use crate::error::CatalogError;
use crate::models::Post;

/// Immutable, ordered set of posts addressable by slug.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Default)]
pub struct Catalog {
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(posts: Vec<Post>) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(posts.len());
        for (idx, post) in posts.iter().enumerate() {
            if post.slug.is_empty() {
                return Err(CatalogError::EmptySlug {
                    id: post.id.clone(),
                });
            }
            if by_slug.insert(post.slug.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateSlug(post.slug.clone()));
            }
        }
        Ok(Self { posts, by_slug })
    }

    /// All posts in definition order.
    pub fn list_all(&self) -> &[Post] {
        &self.posts
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&idx| &self.posts[idx])
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.posts.iter().map(|post| post.slug.as_str())
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
