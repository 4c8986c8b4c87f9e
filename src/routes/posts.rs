use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::{NewPost, Post, PostPatch},
    params::{count_or, flag, optional_i64, require_i64},
    state::AppState,
    store::MAX_PAGE_SIZE,
};

use super::{Empty, IdForm};

#[derive(Deserialize)]
pub struct PostQuery {
    id: Option<String>,
    category: Option<String>,
    #[serde(rename = "nPosts")]
    n_posts: Option<String>,
}

#[derive(Deserialize)]
pub struct PostForm {
    id: Option<String>,
    category: Option<String>,
    #[serde(rename = "showInMenu")]
    show_in_menu: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    content: Option<String>,
    #[serde(rename = "imageLink")]
    image_link: Option<String>,
    #[serde(rename = "resourceLink")]
    resource_link: Option<String>,
    #[serde(rename = "canonicalLink")]
    canonical_link: Option<String>,
}

#[derive(Serialize)]
pub struct PostEnvelope {
    post: Post,
}

#[derive(Serialize)]
pub struct PostsEnvelope {
    posts: Vec<Post>,
}

/// Fetch-one when `id` is present, list otherwise. A listed category of 0
/// keeps its old meaning of "no filter".
pub async fn get_posts_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PostQuery>,
) -> Result<Response, AppError> {
    match optional_i64("id", query.id.as_deref())? {
        Some(id) => {
            let category = require_i64("category", query.category.as_deref())?;
            let post = state
                .store
                .post(id, category)
                .await
                .map_err(|e| AppError::lookup("post", e))?;

            Ok(Json(PostEnvelope { post }).into_response())
        }
        None => {
            let count = count_or("nPosts", query.n_posts.as_deref(), MAX_PAGE_SIZE)?;
            let category =
                optional_i64("category", query.category.as_deref())?.filter(|&c| c != 0);
            let posts = state.store.posts(count, category).await?;

            Ok(Json(PostsEnvelope { posts }).into_response())
        }
    }
}

pub async fn new_post_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Result<Json<Empty>, AppError> {
    let new = NewPost {
        id: require_i64("id", form.id.as_deref())?,
        category: require_i64("category", form.category.as_deref())?,
        title: form.title.unwrap_or_default(),
        subtitle: form.subtitle.unwrap_or_default(),
        kind: form.kind.unwrap_or_default(),
        content: form.content.unwrap_or_default(),
        image_link: form.image_link.unwrap_or_default(),
        resource_link: form.resource_link.unwrap_or_default(),
        canonical_link: form.canonical_link.unwrap_or_default(),
        show_in_menu: flag("showInMenu", form.show_in_menu.as_deref())?,
    };

    state.store.create_post(new).await?;
    Ok(Json(Empty {}))
}

pub async fn update_post_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Result<Json<Empty>, AppError> {
    let id = require_i64("id", form.id.as_deref())?;
    let changes = PostPatch {
        category: require_i64("category", form.category.as_deref())?,
        title: form.title.unwrap_or_default(),
        subtitle: form.subtitle.unwrap_or_default(),
        kind: form.kind.unwrap_or_default(),
        content: form.content.unwrap_or_default(),
        image_link: form.image_link.unwrap_or_default(),
        resource_link: form.resource_link.unwrap_or_default(),
        canonical_link: form.canonical_link.unwrap_or_default(),
    };

    state.store.update_post(id, changes).await?;
    Ok(Json(Empty {}))
}

pub async fn delete_post_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<IdForm>,
) -> Result<Json<Empty>, AppError> {
    let id = require_i64("id", form.id.as_deref())?;

    state.store.delete_post(id).await?;
    Ok(Json(Empty {}))
}
