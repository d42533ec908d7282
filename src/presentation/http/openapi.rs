// src/presentation/http/openapi.rs
use crate::application::dto::ArticleDto;
use crate::domain::pagination::Slice;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const LOCAL_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// One page of articles. No total count is reported.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSliceResponse {
    pub content: Vec<ArticleDto>,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleSliceResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleUpdateDto
        )
    ),
    tags(
        (name = "Articles", description = "Article management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Article Service API",
        description = "Transactional CRUD and paging over articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let raw = env::var("PUBLIC_API_URLS").ok();
        openapi.servers = Some(
            server_urls(raw.as_deref())
                .into_iter()
                .map(Server::new)
                .collect(),
        );
    }
}

/// Comma-separated public base URLs, trailing slashes dropped and duplicates
/// removed, followed by the local server when it is not already listed.
fn server_urls(raw: Option<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim_end_matches('/').to_string())
        .chain(std::iter::once(LOCAL_SERVER.to_string()))
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// Swagger UI under `/docs` (which also serves `/openapi.json`) and Redoc under `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default `spec/openapi.json`)
/// and returns the path that was written.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let path = env::var_os("OPENAPI_SNAPSHOT_PATH")
        .map_or_else(|| PathBuf::from("spec/openapi.json"), PathBuf::from);
    write_openapi_document(&path)?;
    Ok(path)
}

fn write_openapi_document(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}

impl From<Slice<ArticleDto>> for ArticleSliceResponse {
    fn from(page: Slice<ArticleDto>) -> Self {
        Self {
            number: page.number(),
            size: page.size(),
            number_of_elements: page.number_of_elements(),
            first: page.is_first(),
            last: page.is_last(),
            has_next: page.has_next(),
            content: page.into_content(),
        }
    }
}
