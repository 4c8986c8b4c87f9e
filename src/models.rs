use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub category: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_on: i64,
    // Stays 0 until the first update.
    pub last_edited_on: i64,
    pub content: String,
    pub image_link: String,
    pub resource_link: String,
    pub canonical_link: String,
    pub show_in_menu: bool,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: i64,
    pub category: i64,
    pub title: String,
    pub subtitle: String,
    pub kind: String,
    pub content: String,
    pub image_link: String,
    pub resource_link: String,
    pub canonical_link: String,
    pub show_in_menu: bool,
}

impl NewPost {
    pub fn into_post(self, created_on: i64) -> Post {
        Post {
            id: self.id,
            category: self.category,
            title: self.title,
            subtitle: self.subtitle,
            kind: self.kind,
            created_on,
            last_edited_on: 0,
            content: self.content,
            image_link: self.image_link,
            resource_link: self.resource_link,
            canonical_link: self.canonical_link,
            show_in_menu: self.show_in_menu,
        }
    }
}

/// Updatable post fields. `show_in_menu` is set once at creation and
/// never touched by updates.
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub category: i64,
    pub title: String,
    pub subtitle: String,
    pub kind: String,
    pub content: String,
    pub image_link: String,
    pub resource_link: String,
    pub canonical_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub index: i64,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub index: Option<i64>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.index.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub tier: String,
    pub link: String,
    pub expiry: i64,
}

#[derive(Debug, Clone)]
pub struct NewSponsor {
    pub name: String,
    pub logo: String,
    pub tier: String,
    pub link: String,
    pub expiry: i64,
}

impl NewSponsor {
    pub fn into_sponsor(self, id: Uuid) -> Sponsor {
        Sponsor {
            id,
            name: self.name,
            logo: self.logo,
            tier: self.tier,
            link: self.link,
            expiry: self.expiry,
        }
    }
}
