//! Request handlers

pub mod categories;
pub mod posts;
pub mod sponsors;

pub use categories::*;
pub use posts::*;
pub use sponsors::*;

use axum::Json;
use serde::{Deserialize, Serialize};

/// Body of every successful write.
#[derive(Serialize)]
pub struct Empty {}

/// Shared form for the delete endpoints, which all take a single id.
#[derive(Deserialize)]
pub struct IdForm {
    pub id: Option<String>,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn health_handler() -> Json<Health> {
    Json(Health { status: "ok" })
}
