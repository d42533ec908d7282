// src/presentation/http/controllers/articles.rs
use crate::application::dto::{ArticleDto, ArticleUpdateDto};
use crate::domain::article::{ArticlePageRequest, ArticleSortField};
use crate::domain::pagination::{PageRequest, Sort, SortOrder};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::openapi::ArticleSliceResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u32,
    /// Page size; the server default applies when omitted.
    #[serde(default)]
    pub size: Option<u32>,
    /// `property[,asc|desc]`, several criteria separated by `;`. Defaults to `title,asc`.
    #[serde(default)]
    pub sort: Option<String>,
}

impl ArticleListParams {
    pub fn into_page_request(self, default_size: u32) -> HttpResult<ArticlePageRequest> {
        let sort = match self.sort.as_deref() {
            Some(raw) => Sort::parse(raw)?,
            None => Sort::by(SortOrder::asc(ArticleSortField::Title)),
        };
        let request = PageRequest::of(self.page, self.size.unwrap_or(default_size))?;
        Ok(request.with_sort(sort))
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles.", body = ArticleSliceResponse),
        (status = 400, description = "Invalid paging or sort parameters.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleSliceResponse>> {
    let request = params.into_page_request(state.default_page_size)?;

    state
        .services
        .articles
        .get_all(&request)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .articles
        .get(&id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticleDto,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid or malformed article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ArticleDto>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let created = state
        .services
        .articles
        .create(payload)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    request_body = ArticleUpdateDto,
    responses(
        (status = 200, description = "Article updated."),
        (status = 400, description = "Invalid or malformed update.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ArticleUpdateDto>,
) -> HttpResult<StatusCode> {
    state
        .services
        .articles
        .update(&id, payload)
        .await
        .into_http()?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .articles
        .delete(&id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
