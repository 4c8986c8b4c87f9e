use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Category, CategoryPatch, NewPost, NewSponsor, Post, PostPatch, Sponsor};

/// Upper bound on post and sponsor list sizes.
pub const MAX_PAGE_SIZE: i64 = 50;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no matching document")]
    NotFound,

    #[error("document store request failed: {0}")]
    Backend(#[from] mongodb::error::Error),
}

/// Repository operations for the three resource types.
///
/// Implemented by [`MongoStore`](crate::database::MongoStore) for the live
/// service and [`MemoryStore`](crate::memory::MemoryStore) for tests. List
/// operations return documents in the store's natural order; no ordering is
/// guaranteed.
#[async_trait]
pub trait ContentStore: Send + Sync + 'static {
    async fn post(&self, id: i64, category: i64) -> Result<Post, StoreError>;

    /// Up to `min(count, 50)` posts; a count of 0 yields an empty list.
    /// `None` applies no category restriction.
    async fn posts(&self, count: i64, category: Option<i64>) -> Result<Vec<Post>, StoreError>;

    async fn create_post(&self, new: NewPost) -> Result<(), StoreError>;

    /// Matches by id only; succeeds without effect when no post matches.
    async fn update_post(&self, id: i64, changes: PostPatch) -> Result<(), StoreError>;

    async fn delete_post(&self, id: i64) -> Result<(), StoreError>;

    async fn category(&self, id: i64) -> Result<Category, StoreError>;

    /// A count of 0 means the whole collection, unlike the post and sponsor
    /// lists; positive counts are capped at 50.
    async fn categories(&self, count: i64) -> Result<Vec<Category>, StoreError>;

    async fn create_category(&self, category: Category) -> Result<(), StoreError>;

    async fn update_category(&self, id: i64, changes: CategoryPatch) -> Result<(), StoreError>;

    async fn delete_category(&self, id: i64) -> Result<(), StoreError>;

    async fn sponsor(&self, id: Uuid) -> Result<Sponsor, StoreError>;

    async fn sponsors(&self, count: i64) -> Result<Vec<Sponsor>, StoreError>;

    /// The backend assigns a random id to the new sponsor.
    async fn create_sponsor(&self, new: NewSponsor) -> Result<(), StoreError>;

    async fn delete_sponsor(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Post/sponsor list rule: never more than [`MAX_PAGE_SIZE`], zero stays
/// zero.
pub fn page_limit(count: i64) -> i64 {
    count.min(MAX_PAGE_SIZE)
}

/// Category list rule: zero means no limit at all, unlike [`page_limit`].
pub fn category_page_limit(count: i64) -> Option<i64> {
    if count == 0 {
        None
    } else {
        Some(count.min(MAX_PAGE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_limit_caps_at_fifty() {
        assert_eq!(page_limit(0), 0);
        assert_eq!(page_limit(3), 3);
        assert_eq!(page_limit(50), 50);
        assert_eq!(page_limit(51), 50);
        assert_eq!(page_limit(1000), 50);
    }

    #[test]
    fn category_page_limit_zero_means_unlimited() {
        assert_eq!(category_page_limit(0), None);
        assert_eq!(category_page_limit(1), Some(1));
        assert_eq!(category_page_limit(50), Some(50));
        assert_eq!(category_page_limit(200), Some(50));
    }
}
