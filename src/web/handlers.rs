//! HTTP request handlers

use super::state::AppState;
use crate::generator::{GeneratorError, Variant};
use crate::results::{Batch, GeneratedUserAgent};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;

/// Query parameters for the generation endpoints
#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    /// Format variant (`dalvik` or `facebook`)
    pub variant: Option<String>,
    /// Number of user agents to generate
    pub count: Option<u32>,
    /// Response format (`html`, `json`, `txt`)
    pub format: Option<String>,
}

/// Generation response for JSON format
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub variant: Variant,
    pub count: usize,
    pub user_agents: Vec<GeneratedUserAgent>,
}

/// Variant option for the form's radio group
#[derive(Debug, Serialize)]
struct VariantOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

fn base_context(state: &AppState) -> Context {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("version", crate::VERSION);
    ctx
}

/// Resolve variant and count from query parameters
///
/// The variant defaults from settings; an unknown name is the one error the
/// core can raise. The count is clamped the same way the UI's input field
/// bounds it.
fn resolve(state: &AppState, params: &GenerateParams) -> Result<(Variant, usize), GeneratorError> {
    let variant = match params.variant.as_deref() {
        Some(name) => name.parse()?,
        None => state.settings.generator.default_variant,
    };

    let max = state.settings.generator.max_count.max(1);
    let count = params
        .count
        .unwrap_or(state.settings.generator.default_count)
        .clamp(1, max);

    Ok((variant, count as usize))
}

fn run_batch(state: &AppState, variant: Variant, count: usize) -> Batch {
    let batch = Batch::generate(variant, count);
    if state.settings.general.enable_stats {
        state.stats.record_batch(variant, batch.len());
    }
    batch
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let variants: Vec<VariantOption> = Variant::ALL
        .iter()
        .map(|v| VariantOption {
            value: v.as_str(),
            label: v.label(),
            selected: *v == state.settings.generator.default_variant,
        })
        .collect();

    let mut ctx = base_context(&state);
    ctx.insert("variants", &variants);
    ctx.insert("default_count", &state.settings.generator.default_count);
    ctx.insert("max_count", &state.settings.generator.max_count);

    render(&state, "index.html", &ctx)
}

/// Generation handler
pub async fn generate(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Response {
    let (variant, count) = match resolve(&state, &params) {
        Ok(resolved) => resolved,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let batch = run_batch(&state, variant, count);

    match params.format.as_deref() {
        Some("json") => {
            let response = GenerateResponse {
                variant,
                count: batch.len(),
                user_agents: batch.into_items(),
            };
            Json(response).into_response()
        }
        Some("txt") => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            batch.join(),
        )
            .into_response(),
        _ => {
            let mut ctx = base_context(&state);
            ctx.insert("variant", variant.as_str());
            ctx.insert("variant_label", variant.label());
            ctx.insert("count", &batch.len());
            ctx.insert("user_agents", batch.items());
            ctx.insert("joined", &batch.join());
            ctx.insert(
                "download_url",
                &format!("/download?variant={}&count={}", variant, count),
            );

            render(&state, "results.html", &ctx)
        }
    }
}

/// Plain-text download handler
pub async fn download(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Response {
    let (variant, count) = match resolve(&state, &params) {
        Ok(resolved) => resolved,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let batch = run_batch(&state, variant, count);

    (
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", batch.download_filename()),
            ),
        ],
        batch.join(),
    )
        .into_response()
}

/// About page handler
pub async fn about(State(state): State<AppState>) -> impl IntoResponse {
    let mut ctx = base_context(&state);
    ctx.insert("contact_url", &state.settings.general.contact_url);
    ctx.insert("max_count", &state.settings.generator.max_count);

    render(&state, "about.html", &ctx)
}

/// Stats row for one variant
#[derive(Debug, Serialize)]
struct VariantStats {
    label: &'static str,
    count: u64,
}

/// Stats page handler
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    let variants: Vec<VariantStats> = Variant::ALL
        .iter()
        .map(|v| VariantStats {
            label: v.label(),
            count: state.stats.variant_count(*v),
        })
        .collect();

    let mut ctx = base_context(&state);
    ctx.insert("total_batches", &state.stats.total_batches());
    ctx.insert("total_user_agents", &state.stats.total_user_agents());
    ctx.insert("variants", &variants);

    render(&state, "stats.html", &ctx)
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Robots.txt handler
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let content = if state.is_public() {
        "User-agent: *\nAllow: /\nDisallow: /generate\nDisallow: /download\n"
    } else {
        "User-agent: *\nDisallow: /\n"
    };
    ([(header::CONTENT_TYPE, "text/plain")], content)
}

/// Favicon handler
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

fn render(state: &AppState, template: &str, ctx: &Context) -> Response {
    match state.templates.render(template, ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}
