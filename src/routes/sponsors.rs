use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::{NewSponsor, Sponsor},
    params::{count_or, optional_uuid, require_expiry, require_uuid},
    state::AppState,
    store::MAX_PAGE_SIZE,
};

use super::{Empty, IdForm};

#[derive(Deserialize)]
pub struct SponsorQuery {
    id: Option<String>,
    count: Option<String>,
}

#[derive(Deserialize)]
pub struct SponsorForm {
    name: Option<String>,
    logo: Option<String>,
    tier: Option<String>,
    link: Option<String>,
    expiry: Option<String>,
}

#[derive(Serialize)]
pub struct SponsorEnvelope {
    sponsor: Sponsor,
}

#[derive(Serialize)]
pub struct SponsorsEnvelope {
    sponsors: Vec<Sponsor>,
}

pub async fn get_sponsors_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SponsorQuery>,
) -> Result<Response, AppError> {
    match optional_uuid("id", query.id.as_deref())? {
        Some(id) => {
            let sponsor = state
                .store
                .sponsor(id)
                .await
                .map_err(|e| AppError::lookup("sponsor", e))?;

            Ok(Json(SponsorEnvelope { sponsor }).into_response())
        }
        None => {
            let count = count_or("count", query.count.as_deref(), MAX_PAGE_SIZE)?;
            let sponsors = state.store.sponsors(count).await?;

            Ok(Json(SponsorsEnvelope { sponsors }).into_response())
        }
    }
}

/// Rejects an unparsable `expiry` outright instead of storing epoch zero.
pub async fn new_sponsor_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SponsorForm>,
) -> Result<Json<Empty>, AppError> {
    let new = NewSponsor {
        name: form.name.unwrap_or_default(),
        logo: form.logo.unwrap_or_default(),
        tier: form.tier.unwrap_or_default(),
        link: form.link.unwrap_or_default(),
        expiry: require_expiry("expiry", form.expiry.as_deref())?,
    };

    state.store.create_sponsor(new).await?;
    Ok(Json(Empty {}))
}

pub async fn delete_sponsor_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<IdForm>,
) -> Result<Json<Empty>, AppError> {
    let id = require_uuid("id", form.id.as_deref())?;

    state.store.delete_sponsor(id).await?;
    Ok(Json(Empty {}))
}
