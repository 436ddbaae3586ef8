//! Simple content pages: resolved bilingual field maps.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use noor_core::{Language, resolve_fields};
use serde::{Deserialize, Serialize};

use crate::db::content::cached_page_content;
use crate::error::Result;
use crate::state::AppState;

/// Language selection, shared by every content route.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub lang: Language,
}

/// A resolved page payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub page_key: &'static str,
    pub language: Language,
    /// `ltr` or `rtl`, so the frontend can set the document direction.
    pub direction: &'static str,
    pub fields: BTreeMap<String, String>,
    /// When the remote override was last edited, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Resolve one page: static fallback overlaid by the remote document.
pub async fn resolve_page(
    state: &AppState,
    page_key: &'static str,
    language: Language,
) -> Result<ResolvedPage> {
    let remote = cached_page_content(state, page_key).await?;
    let fields = resolve_fields(page_key, language, remote.as_ref());

    Ok(ResolvedPage {
        page_key,
        language,
        direction: language.text_direction(),
        fields,
        updated_at: remote.and_then(|doc| doc.updated_at),
    })
}

macro_rules! page_handler {
    ($name:ident, $key:literal) => {
        #[doc = concat!("GET /", $key, " (content only)")]
        pub async fn $name(
            State(state): State<AppState>,
            Query(query): Query<LanguageQuery>,
        ) -> Result<Json<ResolvedPage>> {
            Ok(Json(resolve_page(&state, $key, query.lang).await?))
        }
    };
}

page_handler!(home, "home");
page_handler!(about, "about");
page_handler!(membership, "membership");
page_handler!(donate, "donate");

/// GET /governance - page content plus the board member list.
pub async fn governance(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<serde_json::Value>> {
    let page = resolve_page(&state, "governance", query.lang).await?;
    let board = crate::db::catalog::list_board_members(state.pool()).await?;

    Ok(Json(serde_json::json!({
        "page": page,
        "boardMembers": board,
    })))
}
