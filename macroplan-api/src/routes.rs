use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use actix_web::{get, http::Method, post, web, HttpRequest, HttpResponse};
use log::{debug, error, warn};
use macroplan_client::{FoodItem, FoodLookup, FoodRecommendations};
use macroplan_model::{PlanResult, UserInput};

use crate::error::ApiError;
use crate::request::{parse_goal, FoodRecommendQuery, FoodSearchQuery, PlanRequest};

const DEFAULT_SEARCH_LIMIT: usize = 5;
const MAX_SEARCH_LIMIT: usize = 25;

pub struct AppState {
    pub static_dir: PathBuf,
    pub food_lookup: Option<Arc<dyn FoodLookup>>,
}

impl AppState {
    pub fn new(static_dir: PathBuf, food_lookup: Option<Arc<dyn FoodLookup>>) -> Self {
        Self {
            static_dir,
            food_lookup,
        }
    }

    fn food_lookup(&self) -> Result<&dyn FoodLookup, ApiError> {
        self.food_lookup
            .as_deref()
            .ok_or(ApiError::FoodLookupUnavailable)
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(plan)
        .service(search_foods)
        .service(recommend_foods)
        .service(login_page)
        .service(index_page)
        .service(static_file);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| {
            warn!("Rejected malformed plan request: {}", err);
            ApiError::BadRequest(err.to_string()).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

#[post("/plan")]
async fn plan(body: web::Json<PlanRequest>) -> Result<web::Json<PlanResult>, ApiError> {
    let input = UserInput::from(body.into_inner());
    debug!("Computing plan for {:?}", input);

    let result = macroplan_engine::compute_plan(&input).map_err(|e| {
        warn!("Rejected plan request: {}", e);
        ApiError::from(e)
    })?;
    Ok(web::Json(result))
}

#[get("/foods/search")]
async fn search_foods(
    state: web::Data<AppState>,
    query: web::Query<FoodSearchQuery>,
) -> Result<web::Json<Vec<FoodItem>>, ApiError> {
    let lookup = state.food_lookup()?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);

    let foods = lookup
        .search_foods(&query.query, limit)
        .await
        .unwrap_or_else(|e| {
            error!("Food search for {:?} failed: {}", query.query, e);
            vec![]
        });
    Ok(web::Json(foods))
}

#[get("/foods/recommend")]
async fn recommend_foods(
    state: web::Data<AppState>,
    query: web::Query<FoodRecommendQuery>,
) -> Result<web::Json<FoodRecommendations>, ApiError> {
    let lookup = state.food_lookup()?;
    let recommendations = macroplan_client::recommend_foods(
        lookup,
        parse_goal(&query.goal),
        query.protein_g,
        query.calories,
    )
    .await;
    Ok(web::Json(recommendations))
}

#[get("/")]
async fn login_page(state: web::Data<AppState>) -> HttpResponse {
    serve_file(&state.static_dir, "login.html").await
}

#[get("/index")]
async fn index_page(state: web::Data<AppState>) -> HttpResponse {
    serve_file(&state.static_dir, "index.html").await
}

#[get("/{file}")]
async fn static_file(state: web::Data<AppState>, file: web::Path<String>) -> HttpResponse {
    let name = file.into_inner();
    if !is_safe_file_name(&name) {
        warn!("Refusing to serve {:?}", name);
        return not_found(&name);
    }
    serve_file(&state.static_dir, &name).await
}

/// Answers bare `OPTIONS` requests that are not CORS preflights.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\'])
}

fn content_type(name: &str) -> &'static str {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

fn not_found(name: &str) -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain")
        .body(format!("{} not found", name))
}

async fn serve_file(dir: &Path, name: &str) -> HttpResponse {
    match tokio::fs::read(dir.join(name)).await {
        Ok(content) => HttpResponse::Ok().content_type(content_type(name)).body(content),
        Err(e) => {
            debug!("Cannot read {}: {}", name, e);
            not_found(name)
        }
    }
}
