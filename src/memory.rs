use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    models::{Category, CategoryPatch, NewPost, NewSponsor, Post, PostPatch, Sponsor},
    store::{ContentStore, StoreError, category_page_limit, page_limit},
};

/// In-process store with the same observable behavior as the mongo backend.
/// Used by the test suites; never in the live service.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    posts: Vec<Post>,
    categories: Vec<Category>,
    sponsors: Vec<Sponsor>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn post(&self, id: i64, category: i64) -> Result<Post, StoreError> {
        self.inner
            .lock()
            .await
            .posts
            .iter()
            .find(|p| p.id == id && p.category == category)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn posts(&self, count: i64, category: Option<i64>) -> Result<Vec<Post>, StoreError> {
        let limit = page_limit(count);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let inner = self.inner.lock().await;
        Ok(inner
            .posts
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create_post(&self, new: NewPost) -> Result<(), StoreError> {
        let post = new.into_post(Utc::now().timestamp());
        self.inner.lock().await.posts.push(post);
        Ok(())
    }

    async fn update_post(&self, id: i64, changes: PostPatch) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if let Some(post) = inner.posts.iter_mut().find(|p| p.id == id) {
            post.category = changes.category;
            post.title = changes.title;
            post.subtitle = changes.subtitle;
            post.kind = changes.kind;
            post.content = changes.content;
            post.image_link = changes.image_link;
            post.resource_link = changes.resource_link;
            post.canonical_link = changes.canonical_link;
            post.last_edited_on = Utc::now().timestamp();
        }
        Ok(())
    }

    async fn delete_post(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if let Some(at) = inner.posts.iter().position(|p| p.id == id) {
            inner.posts.remove(at);
        }
        Ok(())
    }

    async fn category(&self, id: i64) -> Result<Category, StoreError> {
        self.inner
            .lock()
            .await
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn categories(&self, count: i64) -> Result<Vec<Category>, StoreError> {
        let inner = self.inner.lock().await;
        let categories = match category_page_limit(count) {
            Some(limit) => inner.categories.iter().take(limit as usize).cloned().collect(),
            None => inner.categories.clone(),
        };
        Ok(categories)
    }

    async fn create_category(&self, category: Category) -> Result<(), StoreError> {
        self.inner.lock().await.categories.push(category);
        Ok(())
    }

    async fn update_category(&self, id: i64, changes: CategoryPatch) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if let Some(category) = inner.categories.iter_mut().find(|c| c.id == id) {
            if let Some(name) = changes.name {
                category.name = name;
            }
            if let Some(index) = changes.index {
                category.index = index;
            }
        }
        Ok(())
    }

    async fn delete_category(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if let Some(at) = inner.categories.iter().position(|c| c.id == id) {
            inner.categories.remove(at);
        }
        Ok(())
    }

    async fn sponsor(&self, id: Uuid) -> Result<Sponsor, StoreError> {
        self.inner
            .lock()
            .await
            .sponsors
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn sponsors(&self, count: i64) -> Result<Vec<Sponsor>, StoreError> {
        let limit = page_limit(count);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let inner = self.inner.lock().await;
        Ok(inner.sponsors.iter().take(limit as usize).cloned().collect())
    }

    async fn create_sponsor(&self, new: NewSponsor) -> Result<(), StoreError> {
        let sponsor = new.into_sponsor(Uuid::new_v4());
        self.inner.lock().await.sponsors.push(sponsor);
        Ok(())
    }

    async fn delete_sponsor(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if let Some(at) = inner.sponsors.iter().position(|s| s.id == id) {
            inner.sponsors.remove(at);
        }
        Ok(())
    }
}
