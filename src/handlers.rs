use crate::errors::AppError;
use crate::glossary;
use crate::graph::build_graph;
use crate::models::{
    HealthResponse, ListParams, MessageResponse, SearchResponse, ServiceInfo, Term, TermCreate,
    TermListResponse, TermUpdate,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::{render_form_page, render_graph_page, render_terms_page};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use tracing::info;

const TERM_NOT_FOUND: &str = "Термин не найден";

pub async fn root() -> Redirect {
    Redirect::to("/terms")
}

pub async fn terms_page(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_terms_page(data.terms.len()))
}

pub async fn create_page() -> Html<String> {
    Html(render_form_page(None))
}

pub async fn edit_page(Path(id): Path<u64>) -> Html<String> {
    Html(render_form_page(Some(id)))
}

pub async fn graph_page(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_graph_page(&build_graph(&data)))
}

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Глоссарий терминов API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "API работает корректно".to_string(),
    })
}

pub async fn list_terms(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<TermListResponse>, AppError> {
    // Malformed values get the same 422 + detail shape as out-of-range ones.
    let Query(params) =
        params.map_err(|_| AppError::unprocessable("некорректные параметры запроса"))?;
    if params.page < 1 {
        return Err(AppError::unprocessable(
            "параметр page должен быть не меньше 1",
        ));
    }
    if params.per_page < 1 || params.per_page > 100 {
        return Err(AppError::unprocessable(
            "параметр per_page должен быть от 1 до 100",
        ));
    }

    let data = state.data.lock().await;
    Ok(Json(glossary::list_terms(
        &data,
        params.page,
        params.per_page,
        params.search.as_deref(),
    )))
}

pub async fn get_term(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Term>, AppError> {
    let data = state.data.lock().await;
    glossary::find_term(&data, id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(TERM_NOT_FOUND))
}

pub async fn create_term(
    State(state): State<AppState>,
    Json(draft): Json<TermCreate>,
) -> Result<Json<Term>, AppError> {
    let mut data = state.data.lock().await;
    let term = glossary::create_term(&mut data, draft);
    persist_data(&state.data_path, &data).await?;

    info!(term_id = term.id, "created term");
    Ok(Json(term))
}

pub async fn update_term(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(update): Json<TermUpdate>,
) -> Result<Json<Term>, AppError> {
    let mut data = state.data.lock().await;
    let term = glossary::update_term(&mut data, id, update)
        .ok_or_else(|| AppError::not_found(TERM_NOT_FOUND))?;
    persist_data(&state.data_path, &data).await?;

    info!(term_id = term.id, "updated term");
    Ok(Json(term))
}

pub async fn delete_term(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut data = state.data.lock().await;
    if !glossary::delete_term(&mut data, id) {
        return Err(AppError::not_found(TERM_NOT_FOUND));
    }
    persist_data(&state.data_path, &data).await?;

    info!(term_id = id, "deleted term");
    Ok(Json(MessageResponse {
        message: "Термин успешно удален".to_string(),
    }))
}

pub async fn search_terms(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<SearchResponse>, AppError> {
    let data = state.data.lock().await;
    let results = glossary::search_terms(&data, &query);
    Ok(Json(SearchResponse {
        count: results.len(),
        results,
        query,
    }))
}
