use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::{Category, CategoryPatch},
    params::{count_or, optional_i64, require_i64},
    state::AppState,
};

use super::{Empty, IdForm};

#[derive(Deserialize)]
pub struct CategoryQuery {
    count: Option<String>,
}

#[derive(Deserialize)]
pub struct CategoryForm {
    id: Option<String>,
    name: Option<String>,
    index: Option<String>,
}

#[derive(Serialize)]
pub struct CategoryEnvelope {
    category: Category,
}

#[derive(Serialize)]
pub struct CategoriesEnvelope {
    categories: Vec<Category>,
}

/// An absent or zero `count` lists the whole collection.
pub async fn get_categories_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<CategoriesEnvelope>, AppError> {
    let count = count_or("count", query.count.as_deref(), 0)?;
    let categories = state.store.categories(count).await?;

    Ok(Json(CategoriesEnvelope { categories }))
}

pub async fn get_category_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CategoryEnvelope>, AppError> {
    let category = state
        .store
        .category(id)
        .await
        .map_err(|e| AppError::lookup("category", e))?;

    Ok(Json(CategoryEnvelope { category }))
}

pub async fn new_category_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CategoryForm>,
) -> Result<Json<Empty>, AppError> {
    let category = Category {
        id: require_i64("id", form.id.as_deref())?,
        name: form.name.unwrap_or_default(),
        index: require_i64("index", form.index.as_deref())?,
    };

    state.store.create_category(category).await?;
    Ok(Json(Empty {}))
}

pub async fn patch_category_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CategoryForm>,
) -> Result<Json<Empty>, AppError> {
    let id = require_i64("id", form.id.as_deref())?;
    let changes = CategoryPatch {
        name: form.name.filter(|n| !n.is_empty()),
        index: optional_i64("index", form.index.as_deref())?,
    };

    state.store.update_category(id, changes).await?;
    Ok(Json(Empty {}))
}

pub async fn delete_category_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<IdForm>,
) -> Result<Json<Empty>, AppError> {
    let id = require_i64("id", form.id.as_deref())?;

    state.store.delete_category(id).await?;
    Ok(Json(Empty {}))
}
