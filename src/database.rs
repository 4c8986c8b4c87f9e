//! # MongoDB
//!
//! Document store backing the live service.
//!
//! ## Collections
//!
//! - `posts`: keyed by a caller-supplied numeric `id` plus a `category` id
//! - `categories`: keyed by a caller-supplied numeric `id`
//! - `sponsors`: keyed by a server-generated UUID stored in textual form
//!
//! ## Implementation
//!
//! - One client connected at startup, pinged once; the process exits if the
//!   store is unreachable
//! - Every operation is a single round trip, no transactions
//! - Documents are stored with the same field names they are served with

use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    Client, Collection,
    bson::{Document, doc},
    options::ClientOptions,
};
use serde::de::DeserializeOwned;
use tracing::info;
use uuid::Uuid;

use crate::{
    models::{Category, CategoryPatch, NewPost, NewSponsor, Post, PostPatch, Sponsor},
    store::{ContentStore, StoreError, category_page_limit, page_limit},
};

pub struct MongoStore {
    posts: Collection<Post>,
    categories: Collection<Category>,
    sponsors: Collection<Sponsor>,
}

impl MongoStore {
    pub async fn connect(uri: &str, db_name: &str) -> Self {
        let options = ClientOptions::parse(uri).await.unwrap();
        let client = Client::with_options(options).unwrap();
        let db = client.database(db_name);

        db.run_command(doc! {"ping": 1}).await.unwrap();
        info!("Connected to document store at {uri}");

        Self {
            posts: db.collection("posts"),
            categories: db.collection("categories"),
            sponsors: db.collection("sponsors"),
        }
    }
}

async fn collect<T>(
    collection: &Collection<T>,
    filter: Document,
    limit: Option<i64>,
) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned + Send + Sync,
{
    let mut find = collection.find(filter);
    if let Some(limit) = limit {
        find = find.limit(limit);
    }

    let mut cursor = find.await?;
    let mut items = Vec::new();
    while cursor.advance().await? {
        items.push(cursor.deserialize_current()?);
    }

    Ok(items)
}

#[async_trait]
impl ContentStore for MongoStore {
    async fn post(&self, id: i64, category: i64) -> Result<Post, StoreError> {
        self.posts
            .find_one(doc! {"id": id, "category": category})
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn posts(&self, count: i64, category: Option<i64>) -> Result<Vec<Post>, StoreError> {
        let limit = page_limit(count);
        if limit == 0 {
            // A mongo limit of 0 would mean no limit at all.
            return Ok(Vec::new());
        }

        let filter = match category {
            Some(category) => doc! {"category": category},
            None => doc! {},
        };

        collect(&self.posts, filter, Some(limit)).await
    }

    async fn create_post(&self, new: NewPost) -> Result<(), StoreError> {
        let post = new.into_post(Utc::now().timestamp());
        self.posts.insert_one(&post).await?;
        Ok(())
    }

    async fn update_post(&self, id: i64, changes: PostPatch) -> Result<(), StoreError> {
        let update = doc! {
            "$set": {
                "category": changes.category,
                "title": changes.title,
                "subtitle": changes.subtitle,
                "type": changes.kind,
                "content": changes.content,
                "image_link": changes.image_link,
                "resource_link": changes.resource_link,
                "canonical_link": changes.canonical_link,
                "last_edited_on": Utc::now().timestamp(),
            }
        };

        self.posts.update_one(doc! {"id": id}, update).await?;
        Ok(())
    }

    async fn delete_post(&self, id: i64) -> Result<(), StoreError> {
        self.posts.delete_one(doc! {"id": id}).await?;
        Ok(())
    }

    async fn category(&self, id: i64) -> Result<Category, StoreError> {
        self.categories
            .find_one(doc! {"id": id})
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn categories(&self, count: i64) -> Result<Vec<Category>, StoreError> {
        collect(&self.categories, doc! {}, category_page_limit(count)).await
    }

    async fn create_category(&self, category: Category) -> Result<(), StoreError> {
        self.categories.insert_one(&category).await?;
        Ok(())
    }

    async fn update_category(&self, id: i64, changes: CategoryPatch) -> Result<(), StoreError> {
        let mut fields = Document::new();
        if let Some(name) = changes.name {
            fields.insert("name", name);
        }
        if let Some(index) = changes.index {
            fields.insert("index", index);
        }

        if fields.is_empty() {
            return Ok(());
        }

        self.categories
            .update_one(doc! {"id": id}, doc! {"$set": fields})
            .await?;
        Ok(())
    }

    async fn delete_category(&self, id: i64) -> Result<(), StoreError> {
        self.categories.delete_one(doc! {"id": id}).await?;
        Ok(())
    }

    async fn sponsor(&self, id: Uuid) -> Result<Sponsor, StoreError> {
        self.sponsors
            .find_one(doc! {"id": id.to_string()})
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn sponsors(&self, count: i64) -> Result<Vec<Sponsor>, StoreError> {
        let limit = page_limit(count);
        if limit == 0 {
            return Ok(Vec::new());
        }

        collect(&self.sponsors, doc! {}, Some(limit)).await
    }

    async fn create_sponsor(&self, new: NewSponsor) -> Result<(), StoreError> {
        let sponsor = new.into_sponsor(Uuid::new_v4());
        self.sponsors.insert_one(&sponsor).await?;
        Ok(())
    }

    async fn delete_sponsor(&self, id: Uuid) -> Result<(), StoreError> {
        self.sponsors.delete_one(doc! {"id": id.to_string()}).await?;
        Ok(())
    }
}
